use std::sync::Arc;

use crate::resolver::Resolution;

/// Anything able to produce the text a response status should carry.
pub trait ReasonSource {
    /// Resolves the text for a response sent with the given code.
    fn response_text(&self, code: i32) -> Resolution;
}

impl<T: ReasonSource + ?Sized> ReasonSource for &T {
    fn response_text(&self, code: i32) -> Resolution {
        (**self).response_text(code)
    }
}

impl<T: ReasonSource + ?Sized> ReasonSource for Arc<T> {
    fn response_text(&self, code: i32) -> Resolution {
        (**self).response_text(code)
    }
}
