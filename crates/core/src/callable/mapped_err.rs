use super::Callable;

/// A wrapper that converts a callable's error into another type.
pub(crate) struct MappedErr<C, ErrorMap> {
    callable: C,
    error_map: ErrorMap,
}

impl<C, ErrorMap> MappedErr<C, ErrorMap> {
    pub(crate) fn new(callable: C, error_map: ErrorMap) -> Self {
        Self {
            callable,
            error_map,
        }
    }
}

impl<C, ErrorMap, NewError> Callable for MappedErr<C, ErrorMap>
where
    C: Callable,
    ErrorMap: Fn(C::Error) -> NewError,
    NewError: std::error::Error + Send + Sync + 'static,
{
    type Input = C::Input;
    type Output = C::Output;
    type Error = NewError;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        self.callable.call(input).map_err(&self.error_map)
    }
}
