/***************************************/
/*             E R R O R S             */
/***************************************/

/// Raised when the operating system rejects the request to
/// change the scheduling class or priority of the process.
/// Typical causes are a missing privilege (EPERM) or a
/// priority outside the range of the requested class (EINVAL).
///
/// The display format mirrors perror: the name of the failed
/// operation, a colon, then the OS-reported description.
#[derive(Debug, thiserror::Error)]
#[error("{operation}: {source}")]
pub struct SchedulingConfigurationError
{
    /// Name of the OS operation that failed.
    operation : &'static str,

    /// The underlying OS error.
    #[source]
    source    : std::io::Error,
}

impl SchedulingConfigurationError
{
    pub(crate) fn new (operation: &'static str, source: std::io::Error)
        -> SchedulingConfigurationError
    {
        Self
        {
            operation,
            source,
        }
    }

    pub fn operation (&self) -> &'static str
    {
        self.operation
    }

    pub fn os_error (&self) -> &std::io::Error
    {
        &self.source
    }
}
