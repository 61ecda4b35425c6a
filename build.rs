fn main() {
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() != Ok("windows") {
        return;
    }

    let mut res = winres::WindowsResource::new();
    res.set("FileDescription", "Window Opacity Control");
    res.set("ProductName", "Window Opacity");
    res.set("OriginalFilename", "window-opacity.exe");
    if let Err(e) = res.compile() {
        println!("cargo:warning=failed to embed Windows resources: {e}");
    }
}
