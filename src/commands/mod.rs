pub type CmdResult<T> = skillinit::Result<(T, i32)>;

pub mod init;

/// Flag that must directly follow the skill name.
pub(crate) const CATEGORY_FLAG: &str = "--category";

/// `<program> <skill-name> --category <category> ...`
///
/// Checked before clap so a misplaced or missing `--category` gets the usage
/// text rather than a clap error. A lone `--help` fails this check too.
pub(crate) fn invocation_shape_ok(args: &[String]) -> bool {
    args.len() >= 4 && args[2] == CATEGORY_FLAG
}

/// Run the scaffold command and pick the process exit code.
pub(crate) fn run(args: init::InitArgs) -> (skillinit::Result<init::InitOutput>, i32) {
    match init::run(args) {
        Ok((output, exit_code)) => (Ok(output), exit_code),
        Err(err) => (Err(err), 1),
    }
}
