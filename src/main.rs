use clap::Parser;
use prepare_docs::cli::Cli;
use prepare_docs::output::Output;
use prepare_docs::prepare;

fn main() -> anyhow::Result<()> {
    // Reset SIGPIPE handler to default (terminate) so piping to head/tail works correctly
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    let cli = Cli::parse();

    let use_color = !cli.no_color && atty::is(atty::Stream::Stdout);
    let mut output = Output::new(use_color);

    let report = prepare(&cli.config())?;
    output.print_report(&report, cli.verbose)?;

    Ok(())
}
