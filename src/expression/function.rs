use std::f64::consts;

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluated arguments and returns the result. It never
/// fails: domain errors surface as `nan` or infinities.
pub type BuiltinFn = fn(&[f64]) -> f64;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `OneOf(slice)` means the builtin accepts any arity listed in `slice`.
#[derive(Debug, Clone, Copy)]
pub enum Arity {
    Exact(usize),
    OneOf(&'static [usize]),
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    #[must_use]
    pub fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::OneOf(arr) => arr.contains(&n),
        }
    }

    /// Describes the accepted counts, e.g. `1` or `1 or 2`.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Exact(m) => m.to_string(),
            Self::OneOf(arr) => arr.iter()
                                   .map(ToString::to_string)
                                   .collect::<Vec<_>>()
                                   .join(" or "),
        }
    }
}

/// Metadata and implementation of one builtin function.
#[derive(Debug)]
pub struct BuiltinDef {
    pub name:  &'static str,
    pub arity: Arity,
    pub func:  BuiltinFn,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"     => { arity: Arity::Exact(1), func: |a| a[0].sin() },
    "cos"     => { arity: Arity::Exact(1), func: |a| a[0].cos() },
    "tan"     => { arity: Arity::Exact(1), func: |a| a[0].tan() },
    "cot"     => { arity: Arity::Exact(1), func: |a| a[0].tan().recip() },
    "sec"     => { arity: Arity::Exact(1), func: |a| a[0].cos().recip() },
    "csc"     => { arity: Arity::Exact(1), func: |a| a[0].sin().recip() },
    "asin"    => { arity: Arity::Exact(1), func: |a| a[0].asin() },
    "acos"    => { arity: Arity::Exact(1), func: |a| a[0].acos() },
    "atan"    => { arity: Arity::Exact(1), func: |a| a[0].atan() },
    "atan2"   => { arity: Arity::Exact(2), func: |a| a[0].atan2(a[1]) },
    "sinh"    => { arity: Arity::Exact(1), func: |a| a[0].sinh() },
    "cosh"    => { arity: Arity::Exact(1), func: |a| a[0].cosh() },
    "tanh"    => { arity: Arity::Exact(1), func: |a| a[0].tanh() },
    "asinh"   => { arity: Arity::Exact(1), func: |a| a[0].asinh() },
    "acosh"   => { arity: Arity::Exact(1), func: |a| a[0].acosh() },
    "atanh"   => { arity: Arity::Exact(1), func: |a| a[0].atanh() },
    "exp"     => { arity: Arity::Exact(1), func: |a| a[0].exp() },
    "log"     => { arity: Arity::OneOf(&[1, 2]), func: log },
    "ln"      => { arity: Arity::Exact(1), func: |a| a[0].ln() },
    "sqrt"    => { arity: Arity::Exact(1), func: |a| a[0].sqrt() },
    "cbrt"    => { arity: Arity::Exact(1), func: |a| a[0].cbrt() },
    "abs"     => { arity: Arity::Exact(1), func: |a| a[0].abs() },
    "Abs"     => { arity: Arity::Exact(1), func: |a| a[0].abs() },
    "sign"    => { arity: Arity::Exact(1), func: |a| sign(a[0]) },
    "floor"   => { arity: Arity::Exact(1), func: |a| a[0].floor() },
    "ceil"    => { arity: Arity::Exact(1), func: |a| a[0].ceil() },
    "ceiling" => { arity: Arity::Exact(1), func: |a| a[0].ceil() },
    "Min"     => { arity: Arity::Exact(2), func: |a| min_max(a[0], a[1], f64::min) },
    "Max"     => { arity: Arity::Exact(2), func: |a| min_max(a[0], a[1], f64::max) },
}

/// Named constants that may appear as bare symbols.
static CONSTANTS: &[(&str, f64)] = &[("pi", consts::PI), ("E", consts::E), ("e", consts::E)];

/// Looks up a builtin function by name.
///
/// # Example
/// ```
/// use funcplot::expression::function::lookup;
///
/// let cos = lookup("cos").unwrap();
/// assert!(cos.arity.check(1));
/// assert_eq!((cos.func)(&[0.0]), 1.0);
/// assert!(lookup("foo").is_none());
/// ```
#[must_use]
pub fn lookup(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|b| b.name == name)
}

/// Returns the value of a named constant such as `pi`.
#[must_use]
pub fn constant_value(name: &str) -> Option<f64> {
    CONSTANTS.iter()
             .find(|(constant, _)| *constant == name)
             .map(|(_, value)| *value)
}

/// Natural logarithm, or logarithm to the base given as second argument.
fn log(args: &[f64]) -> f64 {
    match args {
        [x, base] => x.ln() / base.ln(),
        [x, ..] => x.ln(),
        [] => f64::NAN,
    }
}

/// Sign of a number: `-1`, `0` or `1`, and `nan` for `nan`.
fn sign(x: f64) -> f64 {
    if x == 0.0 || x.is_nan() { x * 0.0 } else { x.signum() }
}

/// `min`/`max` that propagate `nan` instead of ignoring it.
fn min_max(a: f64, b: f64, pick: fn(f64, f64) -> f64) -> f64 {
    if a.is_nan() || b.is_nan() { f64::NAN } else { pick(a, b) }
}
