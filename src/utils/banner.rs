const BANNER: &str = r"
%c  _   _
%c | \ | | ___ _   _ _ __ ___  _ __
%c |  \| |/ _ \ | | | '__/ _ \| '_ \
%c | |\  |  __/ |_| | | | (_) | | | |
%c |_| \_|\___|\__,_|_|  \___/|_| |_|
%c
%c Building AI-powered apps for a smarter world.
%c Want to join us? Visit neuron.com/careers
";

const LOGO: &str = "color: #0f84ff; font-weight: bold;";
const TAGLINE: &str = "color: #51ff81;";
const FOOTNOTE: &str = "color: #888;";

/// Prints the styled banner to the browser console.
pub fn print_banner() {
    gloo_console::log!(BANNER, LOGO, LOGO, LOGO, LOGO, LOGO, TAGLINE, TAGLINE, FOOTNOTE);
}
