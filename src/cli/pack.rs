use clap::Parser;

/// Arguments for the single-script pack command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Package one script:\n    scriptpack pack clock-widget\n\n\
                  Package into a sandbox copy:\n    scriptpack --test pack clock-widget")]
pub struct PackArgs {
    /// Name of the script directory to package
    pub name: String,
}
