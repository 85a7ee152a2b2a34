//! Booking math and the WhatsApp handoff URL. There is no booking
//! backend; confirming a reservation opens a prefilled chat with the
//! front desk.

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DurationOption {
    pub hours: u8,
    pub label: &'static str,
    pub price_clp: u32,
}

pub const DURATIONS: &[DurationOption] = &[
    DurationOption { hours: 1, label: "1 hora", price_clp: 2_500 },
    DurationOption { hours: 2, label: "2 horas", price_clp: 4_500 },
    DurationOption { hours: 4, label: "4 horas", price_clp: 8_000 },
    DurationOption { hours: 8, label: "Día completo", price_clp: 14_000 },
];

pub const MIN_PODS: u32 = 1;
pub const MAX_PODS: u32 = 5;

pub const TIME_SLOTS: &[&str] = &[
    "08:00", "09:00", "10:00", "11:00", "12:00", "13:00", "14:00",
    "15:00", "16:00", "17:00", "18:00", "19:00", "20:00", "21:00",
];

pub fn total_price(duration: &DurationOption, pods: u32) -> u32 {
    duration.price_clp * pods
}

/// Chilean thousands formatting: `14000` -> `"14.000"`.
pub fn format_clp(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Deep link that opens WhatsApp with the reservation summary prefilled.
pub fn booking_url(date: &str, time: &str, duration: &DurationOption, pods: u32) -> String {
    let message = format!(
        "¡Hola! Quiero reservar {} cápsula(s) para el {} a las {} por {} hora(s). Total: ${} CLP",
        pods,
        date,
        time,
        duration.hours,
        format_clp(total_price(duration, pods)),
    );
    format!(
        "https://wa.me/{}?text={}",
        config::whatsapp_phone(),
        urlencoding::encode(&message),
    )
}

/// Deep link for the quick-contact fab (no reservation details).
pub fn contact_url() -> String {
    format!(
        "https://wa.me/{}?text={}",
        config::whatsapp_phone(),
        urlencoding::encode("Hola! Me interesa reservar una cápsula de estudio"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clp_formatting_groups_thousands() {
        assert_eq!(format_clp(0), "0");
        assert_eq!(format_clp(999), "999");
        assert_eq!(format_clp(2_500), "2.500");
        assert_eq!(format_clp(14_000), "14.000");
        assert_eq!(format_clp(1_234_567), "1.234.567");
    }

    #[test]
    fn total_scales_with_pod_count() {
        let full_day = &DURATIONS[3];
        assert_eq!(total_price(full_day, 1), 14_000);
        assert_eq!(total_price(full_day, 3), 42_000);
    }

    #[test]
    fn booking_url_targets_the_site_phone() {
        let url = booking_url("2026-08-24", "15:00", &DURATIONS[0], 2);
        assert!(url.starts_with("https://wa.me/56912345678?text="));
    }

    #[test]
    fn booking_message_is_fully_percent_encoded() {
        let url = booking_url("2026-08-24", "15:00", &DURATIONS[1], 1);
        let text = url.split_once("?text=").unwrap().1;
        assert!(!text.contains(' '));
        assert!(!text.contains('¡'));
        assert!(text.contains("15%3A00"));
        assert!(text.contains("4.500"));
    }

    #[test]
    fn contact_url_has_a_prefilled_greeting() {
        assert!(contact_url().contains("text=Hola%21"));
    }
}
