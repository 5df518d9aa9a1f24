#[cfg(feature = "csr")]
fn main() {
    user_directory::mount();
}

#[cfg(not(feature = "csr"))]
pub fn main() {
    // the app only runs in the browser, build it with trunk and the csr feature
}
