fn main() {
    #[cfg(windows)]
    {
        let mut res = tauri_winres::WindowsResource::new();
        res.set("FileDescription", "Drive Backup Notifications");
        res.set("ProductName", "Drive Backup");
        res.compile().expect("Failed to compile resources");
    }
}
