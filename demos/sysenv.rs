use sysenv::*;

fn main() {
    env_logger::init();

    // Seed the property table from `-D key=value` arguments, e.g.
    // `cargo run --example sysenv -- -D line.separator=';' -D demo.greeting=hi`
    if let Err(e) = load_sys_args() {
        eprintln!("{}", e);
        std::process::exit(2);
    }
    set_property("demo.started", "true");

    let env = SystemEnvironment;
    for name in &["demo.started", "demo.greeting", "line.separator"] {
        println!("property {:?} = {:?}", name, env.get_property(name));
    }
    for name in &["PATH", "HOME", "DEFINITELY_UNSET_VAR_123"] {
        println!("variable {:?} = {:?}", name, env.get_variable(name));
    }
}
