use yew::prelude::*;

use crate::sections::about_us::AboutUs;
use crate::sections::blog_preview::BlogPreview;
use crate::sections::cta::Cta;
use crate::sections::faq::Faq;
use crate::sections::hero::Hero;
use crate::sections::location::Location;
use crate::sections::pricing::Pricing;
use crate::sections::testimonials::Testimonials;
use crate::sections::value_props::ValueProps;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <main>
            <Hero />
            <ValueProps />
            <Pricing />
            <Testimonials />
            <BlogPreview />
            <AboutUs />
            <Location />
            <Faq />
            <Cta />
        </main>
    }
}
