use std::{
    convert::Infallible,
    fmt::Display,
    io::{self, StdoutLock, Write},
};

/// Receives dispatch results, one at a time, in sequence order.
///
/// Closures automatically implement `Sink`, and `Vec<T>` collects whatever it
/// is given. [`LineSink`] writes each value on its own line.
pub trait Sink<T> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Accepts one value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be accepted, which stops the
    /// dispatch that produced it.
    fn emit(&mut self, value: T) -> Result<(), Self::Error>;
}

/// Blanket implementation for sink closures.
impl<T, F> Sink<T> for F
where
    F: FnMut(T),
{
    type Error = Infallible;

    fn emit(&mut self, value: T) -> Result<(), Self::Error> {
        self(value);
        Ok(())
    }
}

impl<T> Sink<T> for Vec<T> {
    type Error = Infallible;

    fn emit(&mut self, value: T) -> Result<(), Self::Error> {
        self.push(value);
        Ok(())
    }
}

/// A sink that writes each value's `Display` text followed by a newline.
#[derive(Debug)]
pub struct LineSink<W> {
    writer: W,
}

impl<W: Write> LineSink<W> {
    /// Creates a line sink over any writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl LineSink<StdoutLock<'static>> {
    /// Creates a line sink that holds the standard output lock.
    ///
    /// Formatting is shared with [`LineSink::new`], whose tests check the
    /// written lines.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout().lock())
    }
}

impl<T, W> Sink<T> for LineSink<W>
where
    T: Display,
    W: Write,
{
    type Error = io::Error;

    fn emit(&mut self, value: T) -> Result<(), Self::Error> {
        writeln!(self.writer, "{value}")
    }
}
