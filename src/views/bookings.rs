use std::fmt;
use crate::models::booking::Booking;
use crate::views::badge::StatusBadge;

pub struct BookingsTab<'a>(pub &'a [Booking]);

impl fmt::Display for BookingsTab<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No hay reservas")?;
            return writeln!(f, "Las reservas de tus clientes aparecerán aquí");
        }

        writeln!(f, "Reservas Recientes")?;
        writeln!(f, "{:<28} | {:<28} | {:<25} | {:>10} | Estado", "Cliente", "Servicio", "Fechas", "Total")?;
        for booking in self.0 {
            let customer = format!("{} <{}>", booking.customer_label(), booking.customer_email);
            let service = format!("{} ({})", booking.hotel_name, booking.hotel_location);
            let dates = format!("{} - {}", booking.check_in, booking.check_out);
            let total = booking
                .total_price
                .map(|total| format!("${}", total))
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                f,
                "{:<28} | {:<28} | {:<25} | {:>10} | {}",
                customer,
                service,
                dates,
                total,
                StatusBadge::for_status(booking.status)
            )?;
        }
        Ok(())
    }
}
