use appendfilename::errors::AppendFilenameError;
use appendfilename::{app, cli};

fn main() {
    let args = cli::parse();
    if let Err(e) = app::run(args) {
        // Conflicts and the final per-file tally each carry their own code;
        // anything else (logging or signal setup) exits with 1.
        let code = e
            .downcast_ref::<AppendFilenameError>()
            .map_or(1, AppendFilenameError::code);
        std::process::exit(code);
    }
}
