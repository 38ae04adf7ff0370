use std::fmt::Display;
use std::str::FromStr;

macro_rules! checks {
($($name:ident = $val:literal ,)*) => {

#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub enum Group {
    $($name,)*
}
use Group::*;

impl Group {
    pub const ALL: &'static [Group] = &[$($name,)*];
}

impl FromStr for Group {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            $($val => Ok($name),)*
            _ => Err(()),
        }
    }
}

impl Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            $($name => write!(f, $val),)*
        }
    }
}

pub fn print_help() {
    println!(
        "[{}]",
        [$($name,)*]
            .iter()
            .map(|group| format!("--{}", group))
            .collect::<Vec<_>>()
            .join(" ")
    );
}
};
}

checks! {
    Nat = "nat",
    List = "list",
    Tree = "tree",
    Order = "order",
    Purity = "purity",
    Errors = "errors",
}
