#[cfg(feature = "csr")]
pub fn main() {
    // to run: `trunk serve --open`
    use skyreview::app::App;

    console_error_panic_hook::set_once();
    skyreview::utils::panic_hook::init();

    leptos::mount_to_body(App);
}

#[cfg(not(feature = "csr"))]
pub fn main() {
    // no entry point without the csr feature; the library target is what
    // tests link against
}
