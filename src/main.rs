use neuron_landing::utils::banner::print_banner;
use neuron_landing::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    print_banner();
    log::info!("Mounting landing page");
    yew::Renderer::<App>::new().render();
}
