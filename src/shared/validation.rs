use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for embedded photo payloads
    /// Captures the MIME type and the base64 body
    /// - Valid: "data:image/png;base64,iVBORw0...", "data:image/jpeg;base64,"
    /// - Invalid: "data:image/png,raw", "image/png;base64,AAAA", "http://x/y.png"
    pub static ref DATA_URI_REGEX: Regex = Regex::new(r"^data:(.+);base64,(.*)$").unwrap();

    /// Regex for file extensions derived from a MIME subtype
    /// - Valid: "png", "jpeg", "svg+xml", "vnd.ms-photo"
    /// - Invalid: "", "../x", "a/b", "png bmp"
    pub static ref EXTENSION_REGEX: Regex = Regex::new(r"^[A-Za-z0-9.+-]+$").unwrap();
}
