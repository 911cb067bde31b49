use anyhow::Result;
use inquire::InquireError;

/// Runs an interactive flow, mapping Ctrl+C or Escape to `Ok(None)`.
///
/// Any other error is passed through unchanged.
pub fn cancellable<T>(flow: impl FnOnce() -> Result<T>) -> Result<Option<T>> {
    match flow() {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.downcast_ref::<InquireError>().is_some_and(is_cancellation) => {
            // The prompt leaves the cursor mid-line.
            println!();
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

const fn is_cancellation(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}
