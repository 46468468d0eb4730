use std::io;

/// The response currently being built for one request.
///
/// Headers must be set and the status committed before any body byte is
/// written; the body itself is the `io::Write` half. What happens on misuse
/// (late headers, a second status) is up to the implementation.
pub trait ResponseSink: io::Write {
    fn set_header(&mut self, name: &str, value: &str);

    fn write_status(&mut self, code: u16);
}

impl<S: ResponseSink + ?Sized> ResponseSink for &mut S {
    #[inline]
    fn set_header(&mut self, name: &str, value: &str) {
        (**self).set_header(name, value)
    }

    #[inline]
    fn write_status(&mut self, code: u16) {
        (**self).write_status(code)
    }
}

