use std::fmt;

/// Error that is returned by the batched routines if the per-trajectory inputs
/// do not have the same number of trajectories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSizeError {
    pub message: String,
    pub routine: &'static str,
    pub first: &'static str,
    pub second: &'static str,
    pub first_len: usize,
    pub second_len: usize,
}

impl BatchSizeError {
    pub fn new(
        routine: &'static str,
        first: &'static str,
        first_len: usize,
        second: &'static str,
        second_len: usize,
    ) -> Self {
        let message: String = format! {"{}: the sizes of the input variables {} and {} \
        are inconsistent, {}.len() = {}, {}.len() = {}",
        routine,
        first,
        second,
        first,
        first_len,
        second,
        second_len};
        Self {
            message,
            routine,
            first,
            second,
            first_len,
            second_len,
        }
    }

    /// Returns an error if the two batch sizes differ. The error is also written to the log.
    pub fn check(
        routine: &'static str,
        first: &'static str,
        first_len: usize,
        second: &'static str,
        second_len: usize,
    ) -> Result<(), Self> {
        if first_len == second_len {
            Ok(())
        } else {
            let err = Self::new(routine, first, first_len, second, second_len);
            log::error!("ERROR in {}", err);
            Err(err)
        }
    }
}

impl fmt::Display for BatchSizeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write! {f, "{}", self.message.as_str()}
    }
}

impl std::error::Error for BatchSizeError {}
