use std::fmt;
use crate::models::listing::{Business, Hotel, ListingStatus};
use crate::views::badge::StatusBadge;

pub struct HotelsTab<'a>(pub &'a [Hotel]);

pub struct BusinessesTab<'a>(pub &'a [Business]);

fn format_price(price: Option<f64>) -> String {
    match price {
        Some(price) => format!("${} MXN/noche", price),
        None => "Precio no disponible".to_string(),
    }
}

impl fmt::Display for HotelsTab<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No tienes hoteles registrados")?;
            return writeln!(f, "> + Registrar Hotel");
        }

        writeln!(f, "Mis Hoteles ({})                > + Nuevo Hotel", self.0.len())?;
        for hotel in self.0 {
            writeln!(f)?;
            writeln!(f, "{} {}", hotel.name, StatusBadge::for_status(hotel.status))?;
            if !hotel.description.is_empty() {
                writeln!(f, "  {}", hotel.description)?;
            }
            writeln!(f, "  📍 {} • {}", hotel.location, hotel.address)?;
            writeln!(f, "  {}", format_price(hotel.price))?;
            writeln!(f, "  > Editar: /portal/editar-hotel/{}", hotel.id)?;
            if hotel.status == ListingStatus::Pending {
                writeln!(f, "  ⏳ Tu hotel está pendiente de aprobación por el administrador")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for BusinessesTab<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No tienes restaurantes registrados")?;
            return writeln!(f, "> + Registrar Restaurante");
        }

        writeln!(f, "Mis Restaurantes ({})          > + Nuevo Restaurante", self.0.len())?;
        for business in self.0 {
            writeln!(f)?;
            writeln!(f, "{} {}", business.name, StatusBadge::for_status(business.status))?;
            if !business.description.is_empty() {
                writeln!(f, "  {}", business.description)?;
            }
            writeln!(f, "  📍 {} • {}", business.location, business.address)?;
            if business.status == ListingStatus::Pending {
                writeln!(f, "  ⏳ Tu restaurante está pendiente de aprobación por el administrador")?;
            }
        }
        Ok(())
    }
}
