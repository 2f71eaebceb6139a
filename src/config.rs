#[cfg(debug_assertions)]
pub fn get_relay_url() -> &'static str {
    "http://localhost:3001/submit"  // Local relay mock when running with trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_relay_url() -> &'static str {
    "https://api.web3forms.com/submit"
}

// Public form key, the relay binds it to the studio inbox.
pub const RELAY_ACCESS_KEY: &str = "297f7167-ea8f-4cc6-9381-3b824c5ece03";
pub const RELAY_FROM_NAME: &str = "Nowy Formularz";

pub const SITE_URL: &str = "https://darkoak.pl/";
pub const WHATSAPP_URL: &str = "https://wa.me/48669004609";
pub const PHONE_HREF: &str = "tel:+48669004609";
pub const PHONE_DISPLAY: &str = "+48 669 004 609";
pub const EMAIL: &str = "biuro@darkoak.pl";

pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d2398.1965027482197!2d18.702621699999998!3d53.052776599999994!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x471ccd74543ae8fd%3A0xba243ff653a38966!2sDark%20Oak!5e0!3m2!1sen!2suk!4v1758657419347!5m2!1sen!2suk";

/// Viewport width (px) at and above which the desktop link row replaces the overlay menu.
pub const MENU_BREAKPOINT_PX: f64 = 880.0;
