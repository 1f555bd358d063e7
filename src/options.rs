//! Upgrade options.

use httparse::Header;

/// Options for accepting an upgrade request.
#[derive(Debug, Default)]
pub struct UpgradeOptions<'a, 'b> {
    /// Additional headers to send with the `101` response.
    pub headers: &'a [Header<'b>],
}

impl<'a, 'b> UpgradeOptions<'a, 'b> {
    /// Sets additional headers to send with the `101` response.
    pub const fn with_headers(mut self, headers: &'a [Header<'b>]) -> Self {
        self.headers = headers;
        self
    }

    /// Returns the additional headers.
    pub const fn headers(&self) -> &[Header<'b>] {
        self.headers
    }
}
