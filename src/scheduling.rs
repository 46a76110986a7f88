/***************************************/
/*         S C H E D U L I N G         */
/***************************************/
use crate::error::SchedulingConfigurationError;

/// Process identifier addressing the calling process in the
/// Linux scheduling syscalls.
pub const SELF_PID : i32 = 0;

/// The scheduling classes this program distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulingPolicy
{
    /// Fixed-priority real-time class (SCHED_FIFO on Linux).
    FixedPriority,

    /// Ordinary time-shared class (SCHED_OTHER on Linux).
    TimeShared,

    /// Any other class reported by the OS.
    Other(i32),
}

/// The request issued at startup: a scheduling class and a
/// priority valid within that class. Built once, handed to
/// the OS, never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SchedulingRequest
{
    /// The desired scheduling class.
    pub policy   : SchedulingPolicy,

    /// The desired priority within that class.
    pub priority : i32,
}

/// Capability interface over the scheduling facility of the
/// host OS. The program treats the OS as an opaque collaborator:
/// priority validation is left entirely to it.
pub trait SchedulingController
{
    /// The maximum priority supported by the fixed-priority class.
    fn max_priority (&self) -> i32;

    /// Place the process `pid` (SELF_PID meaning the calling
    /// process) under the fixed-priority class at `priority`.
    fn set_fixed_priority (&mut self, pid: i32, priority: i32)
        -> Result<(), SchedulingConfigurationError>;

    /// Query the scheduling class the OS currently applies to `pid`.
    fn current_policy (&self, pid: i32)
        -> Result<SchedulingPolicy, SchedulingConfigurationError>;
}

/// The real controller, backed by the Linux scheduling syscalls.
pub struct LinuxScheduler;

impl SchedulingController for LinuxScheduler
{
    fn max_priority (&self) -> i32
    {
        // 99 on Linux for SCHED_FIFO.
        unsafe
            {
                libc::sched_get_priority_max (libc::SCHED_FIFO)
            }
    }

    fn set_fixed_priority (&mut self, pid: i32, priority: i32)
        -> Result<(), SchedulingConfigurationError>
    {
        let sched_param = libc::sched_param
        {
            sched_priority: priority as libc::c_int,
        };
        let outcome = unsafe
            {
                libc::sched_setscheduler (pid as libc::pid_t,
                                          libc::SCHED_FIFO,
                                          &sched_param)
            };
        if outcome == -1
        {
            return Err (SchedulingConfigurationError::new (
                "sched_setscheduler",
                std::io::Error::last_os_error ()));
        }
        Ok(())
    }

    fn current_policy (&self, pid: i32)
        -> Result<SchedulingPolicy, SchedulingConfigurationError>
    {
        let outcome = unsafe
            {
                libc::sched_getscheduler (pid as libc::pid_t)
            };
        match outcome
        {
            -1 =>
                {
                    Err (SchedulingConfigurationError::new (
                        "sched_getscheduler",
                        std::io::Error::last_os_error ()))
                }
            libc::SCHED_FIFO  => Ok(SchedulingPolicy::FixedPriority),
            libc::SCHED_OTHER => Ok(SchedulingPolicy::TimeShared),
            other             => Ok(SchedulingPolicy::Other(other)),
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn max_priority_is_positive ()
    {
        let scheduler = LinuxScheduler;
        assert! (scheduler.max_priority () >= 1);
    }

    #[test]
    fn current_policy_answers_for_the_calling_process ()
    {
        // The exact class depends on how the harness was started,
        // the query itself must always succeed for pid 0.
        let scheduler = LinuxScheduler;
        scheduler.current_policy (SELF_PID).unwrap ();
    }

    #[test]
    fn out_of_range_priority_is_rejected ()
    {
        // One past the class maximum is invalid regardless of
        // privilege, so this exercises the failure path even
        // when the suite runs as root.
        let mut scheduler = LinuxScheduler;
        let too_high = scheduler.max_priority () + 1;
        let result = scheduler.set_fixed_priority (SELF_PID, too_high);
        let error = result.unwrap_err ();
        assert_eq! (error.operation (), "sched_setscheduler");
        assert! (!error.to_string ().is_empty ());
    }

    #[test]
    fn real_configuration_depends_on_privilege ()
    {
        let mut scheduler = LinuxScheduler;
        let maximum = scheduler.max_priority ();
        match scheduler.set_fixed_priority (SELF_PID, maximum)
        {
            Ok(()) =>
                {
                    // Privileged environment: the OS must now report
                    // the fixed-priority class for this thread.
                    let policy = scheduler.current_policy (SELF_PID).unwrap ();
                    assert_eq! (policy, SchedulingPolicy::FixedPriority);

                    // Return to the time-shared class so the rest of
                    // the suite runs under the default policy.
                    let sched_param = libc::sched_param
                    {
                        sched_priority: 0 as libc::c_int,
                    };
                    unsafe
                        {
                            libc::sched_setscheduler (SELF_PID as libc::pid_t,
                                                      libc::SCHED_OTHER,
                                                      &sched_param);
                        }
                }
            Err(error) =>
                {
                    // Unprivileged environment: the request must fail
                    // with a perror-shaped diagnostic.
                    assert_eq! (error.operation (), "sched_setscheduler");
                    assert! (error.os_error ().raw_os_error ().is_some ());
                }
        }
    }
}
