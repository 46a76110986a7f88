/***************************************/
/*     W O R K L O A D   T R A I T     */
/***************************************/
use std::io::Write;

/// The line announced on every iteration of the demonstration
/// workload.
pub static REALTIME_MESSAGE : &str = "Running real-time process...";

/// This trait models the work performed once the process runs
/// under the real-time class.
pub trait Workload
{
    /// One iteration of the workload.
    fn exec_workload (&mut self);
}

/// The demonstration workload: announce on standard output that
/// the process is running in the real-time class.
pub struct MessageWorkload;

impl Workload for MessageWorkload
{
    fn exec_workload (&mut self)
    {
        // Write failures on the output stream are deliberately
        // not checked; a closed stdout does not stop the loop.
        let _ = writeln! (std::io::stdout (), "{}", REALTIME_MESSAGE);
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn the_announcement_line_is_fixed ()
    {
        assert_eq! (REALTIME_MESSAGE, "Running real-time process...");

        let mut workload = MessageWorkload;
        workload.exec_workload ();
    }
}
