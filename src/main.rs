use clap::Parser;

use commands::init;

mod commands;
mod output;
mod tty;

#[derive(Parser)]
#[command(name = "skillinit")]
#[command(about = "Scaffold a bilingual (ua/en) skill folder")]
#[command(disable_help_flag = true)]
struct Cli {
    #[command(flatten)]
    init: init::InitArgs,

    /// Print the result as a JSON envelope instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> std::process::ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if !commands::invocation_shape_ok(&args) {
        output::print_usage();
        return std::process::ExitCode::from(1);
    }

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("error: {}", e.kind().as_str().unwrap_or("invalid arguments"));
            output::print_usage();
            return std::process::ExitCode::from(1);
        }
    };

    let json = cli.json;
    let (result, exit_code) = commands::run(cli.init);

    if json {
        output::print_json_result(result);
    } else {
        output::print_text_result(result);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
