/*******************************************/
/*    R E A L T I M E    R U N N E R       */
/*******************************************/
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

pub mod error;
pub mod scheduling;
pub mod workload;

use crate::error::SchedulingConfigurationError;
use crate::scheduling::SchedulingController;
use crate::scheduling::SchedulingPolicy;
use crate::scheduling::SchedulingRequest;
use crate::scheduling::SELF_PID;
use crate::workload::Workload;

/// Lifecycle of the runner: it starts unconfigured and becomes
/// real-time on a successful configuration request. There is no
/// way back; process exit restores the default scheduling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RunnerState
{
    Unconfigured,
    RunningRealtime,
}

/// Requests the fixed-priority real-time class for the calling
/// process, then performs an unbounded amount of workload
/// iterations.
pub struct RealtimeRunner<C: SchedulingController>
{
    /// The scheduling facility of the host OS.
    controller : C,

    /// Current lifecycle state.
    state      : RunnerState,
}

impl<C: SchedulingController> RealtimeRunner<C>
{
    pub fn new (controller: C) -> RealtimeRunner<C>
    {
        Self
        {
            controller,
            state     : RunnerState::Unconfigured,
        }
    }

    /// The startup request: the fixed-priority class at the
    /// maximum priority the OS supports for it. Deterministic
    /// for a given OS.
    pub fn request (&self) -> SchedulingRequest
    {
        SchedulingRequest
        {
            policy  : SchedulingPolicy::FixedPriority,
            priority: self.controller.max_priority (),
        }
    }

    /// Issue the scheduling request for the calling process.
    /// On rejection the error is returned as-is: no retry, no
    /// fallback to a lower-privilege class.
    pub fn configure (&mut self) -> Result<(), SchedulingConfigurationError>
    {
        let request = self.request ();
        self.controller.set_fixed_priority (SELF_PID, request.priority)?;

        #[cfg(feature = "print_log")]
        println! ("Scheduling configured: {:?} at priority {}",
                  request.policy, request.priority);

        self.state = RunnerState::RunningRealtime;
        Ok(())
    }

    /// Run the workload until the cancellation flag is raised,
    /// returning the number of completed iterations. The shipped
    /// binary passes a flag that is never raised, so this loops
    /// forever in normal operation.
    pub fn run<W: Workload> (&mut self, workload: &mut W, cancel: &AtomicBool) -> u64
    {
        // Reaching this point without a successful configuration
        // is a programming error, not an OS rejection.
        assert! (self.state == RunnerState::RunningRealtime,
                 "run-workload entered before configure-scheduling succeeded");

        #[cfg(feature = "print_log")]
        println! ("Start workload");

        let mut iterations = 0u64;
        while !cancel.load (Ordering::Relaxed)
        {
            workload.exec_workload ();
            iterations += 1;
        }
        iterations
    }

    pub fn controller (&self) -> &C
    {
        &self.controller
    }
}
