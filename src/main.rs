use std::process::ExitCode;

fn main() -> ExitCode {
    catalog_enricher_lib::run()
}
