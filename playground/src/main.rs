use argset::{ArgumentSet, OrExit};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let args = ArgumentSet::from_env();
    let name = args.get_string("name", true, "", &["n"]).or_exit();
    let count = args.get_uint("count", false, 1, &["c"]).or_exit();
    let offset = args.get_int("offset", false, 0, &[]).or_exit();
    let scale = args.get_float("scale", false, 1.0, &["s"]).or_exit();
    let verbose = args.get_bool("verbose", &["v"]);

    tracing::info!(positionals = args.positionals().len(), "parsed arguments");

    println!("name={name} count={count} offset={offset} scale={scale} verbose={verbose}");
    for positional in args.positionals() {
        println!("positional={positional}");
    }
}
