//! Site-wide constants. Everything here is fixed at build time; there is
//! no backend to fetch any of it from.

pub const SITE_NAME: &str = "FocusPod";
pub const SITE_TAGLINE: &str = "Tu santuario de concentración";
pub const SITE_LOCATION: &str = "Temuco";
pub const SITE_REGION: &str = "Región de La Araucanía";
pub const SITE_COUNTRY: &str = "Chile";
pub const SITE_ADDRESS: &str = "Av. Alemania 0123";
pub const SITE_EMAIL: &str = "hola@focuspod.cl";
pub const SITE_PHONE: &str = "+56 9 1234 5678";
pub const SITE_INSTAGRAM: &str = "https://instagram.com/focuspod.temuco";
pub const SITE_TIKTOK: &str = "https://tiktok.com/@focuspod.temuco";

pub const PRICE_PER_HOUR_CLP: u32 = 2_500;

/// In-page anchors shown in the navbar, in page order.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#inicio", "Inicio"),
    ("#beneficios", "Beneficios"),
    ("#precios", "Precios"),
    ("#testimonios", "Testimonios"),
    ("#ubicacion", "Ubicación"),
    ("#faq", "FAQ"),
];

pub const FOOTER_NAV_LINKS: &[(&str, &str)] = &[
    ("#inicio", "Inicio"),
    ("#beneficios", "Beneficios"),
    ("#precios", "Precios"),
    ("#blog", "Blog"),
    ("#nosotros", "Nosotros"),
];

pub const FOOTER_LEGAL_LINKS: &[(&str, &str)] = &[
    ("#", "Términos de Servicio"),
    ("#", "Política de Privacidad"),
    ("#", "Política de Cancelación"),
];

pub const SCHEDULE: &[(&str, &str)] = &[
    ("Lunes - Viernes", "8:00 - 22:00"),
    ("Sábado", "9:00 - 20:00"),
    ("Domingo", "10:00 - 18:00"),
];

pub const NEARBY_PLACES: &[(&str, &str)] = &[
    ("UFRO", "5 min caminando"),
    ("UCT", "8 min caminando"),
    ("Mall Portal Temuco", "3 min caminando"),
    ("U. Autónoma", "10 min caminando"),
];

/// Phone number reduced to the digits `wa.me` expects.
pub fn whatsapp_phone() -> String {
    SITE_PHONE.chars().filter(char::is_ascii_digit).collect()
}

/// `tel:` target without the display spacing.
pub fn tel_href() -> String {
    format!("tel:{}", SITE_PHONE.replace(' ', ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_phone_strips_everything_but_digits() {
        assert_eq!(whatsapp_phone(), "56912345678");
    }

    #[test]
    fn tel_href_keeps_the_plus() {
        assert_eq!(tel_href(), "tel:+56912345678");
    }
}
