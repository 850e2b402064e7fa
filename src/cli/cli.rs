use clap::Parser;

use crate::driver::Dispatch;

#[derive(Parser, Debug)]
#[clap(name = "figures")]
#[clap(bin_name = "figures")]
#[clap(about = "Draws a rectangle and a circle through runtime dispatch", long_about = None)]
pub struct Cli {
    /// How `draw` is dispatched to each shape
    #[clap(long, arg_enum, default_value = "vtable")]
    pub dispatch: Dispatch,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["figures"]).unwrap();
        assert_eq!(cli.dispatch, Dispatch::VTable);
    }

    #[test]
    fn test_dispatch_flag() {
        let cli = Cli::try_parse_from(["figures", "--dispatch", "oop"]).unwrap();
        assert_eq!(cli.dispatch, Dispatch::Oop);
        let cli = Cli::try_parse_from(["figures", "--dispatch", "fp"]).unwrap();
        assert_eq!(cli.dispatch, Dispatch::Fp);
    }

    #[test]
    fn test_unknown_dispatch() {
        assert!(Cli::try_parse_from(["figures", "--dispatch", "match"]).is_err());
    }
}
