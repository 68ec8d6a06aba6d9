use basic::mach::{Event, Runtime};

#[allow(dead_code)]
pub fn runtime(lines: &[&str]) -> Runtime {
    let mut r = Runtime::default();
    for line in lines {
        r.enter(line);
    }
    r
}

pub fn exec(runtime: &mut Runtime) -> String {
    exec_n(runtime, 5000)
}

/// Collect everything the runtime prints until it stops, asks for input
/// or quits.
pub fn exec_n(runtime: &mut Runtime, cycles: usize) -> String {
    let mut s = String::new();
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        match &event {
            Event::Stopped => {
                break;
            }
            Event::Error(error) => {
                s.push_str(&format!("{}\n", error));
            }
            Event::Running => {
                if prev_running {
                    s.push_str(&format!("\n{} Execution cycles exceeded.\n", cycles));
                    break;
                }
            }
            Event::Print(ps) => {
                s.push_str(&ps);
            }
            Event::Input(ps) => {
                s.push_str(&ps);
                break;
            }
            Event::List(ls) => {
                s.push_str(&format!("{}\n", ls));
            }
            Event::Quit => {
                s.push_str("QUIT\n");
                break;
            }
        }
        match event {
            Event::Running => prev_running = true,
            _ => prev_running = false,
        }
    }
    s
}
