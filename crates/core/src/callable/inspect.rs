use super::Callable;

/// A wrapper that observes input and output without modifying behavior.
///
/// This struct is used internally by `.inspect()`. The output handler only
/// sees successful results.
pub(crate) struct Inspect<C, InputHandler, OutputHandler> {
    pub(crate) callable: C,
    pub(crate) input_handler: InputHandler,
    pub(crate) output_handler: OutputHandler,
}

impl<C, InputHandler, OutputHandler> Callable for Inspect<C, InputHandler, OutputHandler>
where
    C: Callable,
    InputHandler: Fn(&C::Input),
    OutputHandler: Fn(&C::Output),
{
    type Input = C::Input;
    type Output = C::Output;
    type Error = C::Error;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        (self.input_handler)(&input);
        let output = self.callable.call(input)?;
        (self.output_handler)(&output);
        Ok(output)
    }
}
