use std::error::Error;
use std::str::FromStr;

use sssp_engine::cli::CliErr;

pub fn parse_arg_required<T: FromStr>(args: &mut impl Iterator<Item = String>, field_name: &str) -> Result<T, Box<dyn Error>> {
    match args.next() {
        Some(value) => T::from_str(&value).map_err(|_| {
            println!("Invalid argument type for `{}`", field_name);
            Box::new(CliErr("Invalid argument!")) as Box<dyn Error>
        }),
        None => {
            println!("Missing value for argument `{}`", field_name);
            Err(Box::new(CliErr("Missing arguments!")))
        }
    }
}

pub fn parse_arg_optional<T: FromStr + Clone>(args: &mut impl Iterator<Item = String>, default: T) -> T {
    args.next().map(|s| T::from_str(&s).unwrap_or(default.clone())).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> impl Iterator<Item = String> {
        values.iter().map(|value| value.to_string()).collect::<Vec<String>>().into_iter()
    }

    #[test]
    fn required_arguments() {
        let mut it = args(&["graph.csv", "12", "abc"]);

        assert_eq!(parse_arg_required::<String>(&mut it, "path").unwrap(), "graph.csv");
        assert_eq!(parse_arg_required::<u32>(&mut it, "start").unwrap(), 12);
        assert!(parse_arg_required::<u32>(&mut it, "repeats").is_err());
        assert!(parse_arg_required::<u32>(&mut it, "seed").is_err());
    }

    #[test]
    fn optional_arguments_fall_back_to_default() {
        let mut it = args(&["x"]);

        assert_eq!(parse_arg_optional(&mut it, 10usize), 10);
        assert_eq!(parse_arg_optional(&mut it, 42u64), 42);
    }
}
