fn main() {
    #[cfg(windows)]
    {
        if std::path::Path::new("assets/icons/amana.ico").exists() {
            let mut res = winresource::WindowsResource::new();
            res.set_icon("assets/icons/amana.ico");
            if let Err(e) = res.compile() {
                println!("cargo:warning=failed to embed amana.ico: {}", e);
            }
        } else {
            println!("cargo:warning=amana.ico not found, skipping icon embedding");
        }
    }
}
