use log::{info, Level};
use yew::prelude::*;

mod booking;
mod config;
mod prefs;
mod storage;

mod components {
    pub mod accessibility;
    pub mod cookie_consent;
    pub mod footer;
    pub mod navbar;
    pub mod quick_booking;
    pub mod quick_contact;
    pub mod scroll_to_top;
    pub mod section_header;
}
mod effects {
    pub mod floating_particles;
    pub mod reactive_orb;
}
mod hooks {
    pub mod mouse_tracking;
    pub mod spring;
}
mod pages {
    pub mod home;
}
mod sections {
    pub mod about_us;
    pub mod blog_preview;
    pub mod cta;
    pub mod faq;
    pub mod hero;
    pub mod location;
    pub mod pricing;
    pub mod testimonials;
    pub mod value_props;
}
mod showcase {
    pub mod machine;
    pub mod mode;
}

use components::accessibility::AccessibilityWidget;
use components::cookie_consent::CookieConsent;
use components::footer::Footer;
use components::navbar::Navbar;
use components::quick_booking::QuickBooking;
use components::quick_contact::QuickContact;
use components::scroll_to_top::ScrollToTop;
use pages::home::Home;
use showcase::mode::ShowcaseMode;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <Navbar />
            <Home />
            <Footer />
            <ShowcaseMode />
            <QuickBooking />
            <QuickContact />
            <AccessibilityWidget />
            <ScrollToTop />
            <CookieConsent />
            <style>{GLOBAL_STYLE}</style>
        </>
    }
}

const GLOBAL_STYLE: &str = r#"
    :root {
        color-scheme: dark;
    }

    * {
        box-sizing: border-box;
    }

    html {
        scroll-behavior: smooth;
    }

    .reduce-motion,
    .reduce-motion * {
        scroll-behavior: auto;
        transition-duration: 0.01ms !important;
        animation-duration: 0.01ms !important;
    }

    body {
        margin: 0;
        background: #121212;
        color: #E5E5E5;
        font-family: 'Inter', system-ui, -apple-system, sans-serif;
        -webkit-font-smoothing: antialiased;
    }

    .high-contrast body {
        background: #000;
        color: #fff;
    }

    .high-contrast .nav-link,
    .high-contrast .footer-col a,
    .high-contrast p {
        color: #fff !important;
    }

    section {
        scroll-margin-top: 70px;
    }

    ::selection {
        background: rgba(245, 158, 11, 0.4);
    }
"#;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting FocusPod frontend");
    yew::Renderer::<App>::new().render();
}
