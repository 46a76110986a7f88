/*******************************************/
/*    R T   P R I O R I T Y   D E M O      */
/*******************************************/
use realtime_runner::RealtimeRunner;
use realtime_runner::scheduling::LinuxScheduler;
use realtime_runner::workload::MessageWorkload;

fn main ()
{
    let mut runner = RealtimeRunner::new (LinuxScheduler);

    // Request the fixed-priority class at its maximum priority.
    // No retry and no fallback: report and leave with status 1.
    if let Err (error) = runner.configure ()
    {
        eprintln! ("{}", error);
        std::process::exit (1);
    }

    // Loop forever. The flag is never raised here, so external
    // termination is the only way to stop the process; default
    // signal disposition applies.
    let cancel = std::sync::atomic::AtomicBool::new (false);
    let mut workload = MessageWorkload;
    runner.run (&mut workload, &cancel);
}
