use super::Val;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Call sites keep at most this many arguments; extras are evaluated
/// and dropped.
pub const MAX_FUNC_ARGS: usize = 8;

/// ## Mathematics builtins
///
/// Lowercase names dispatched by string. Arguments arrive coerced to
/// numbers; missing arguments contribute `0`. The zero-argument names
/// `pi` and `e` also accept an empty `()`.

pub struct Function {}

impl Function {
    pub fn call(name: &str, args: &[f64]) -> Result<Val> {
        let arg = |index: usize| args.get(index).copied().unwrap_or(0.0);
        let num = match name {
            "sin" => arg(0).sin(),
            "cos" => arg(0).cos(),
            "tan" => arg(0).tan(),
            "asin" => arg(0).asin(),
            "acos" => arg(0).acos(),
            "atan" => arg(0).atan(),
            "atan2" => arg(0).atan2(arg(1)),
            "sinh" => arg(0).sinh(),
            "cosh" => arg(0).cosh(),
            "tanh" => arg(0).tanh(),
            "exp" => arg(0).exp(),
            "log" => arg(0).ln(),
            "log2" => arg(0).log2(),
            "log10" => arg(0).log10(),
            "sqrt" => arg(0).sqrt(),
            "cbrt" => arg(0).cbrt(),
            "pow" => arg(0).powf(arg(1)),
            "ceil" => arg(0).ceil(),
            "floor" => arg(0).floor(),
            "round" => arg(0).round(),
            "trunc" => arg(0).trunc(),
            "abs" | "fabs" => arg(0).abs(),
            "sign" => {
                if arg(0) > 0.0 {
                    1.0
                } else if arg(0) < 0.0 {
                    -1.0
                } else {
                    0.0
                }
            }
            "fmod" => arg(0) % arg(1),
            "hypot" => arg(0).hypot(arg(1)),
            "max" | "fmax" => arg(0).max(arg(1)),
            "min" | "fmin" => arg(0).min(arg(1)),
            "pi" => std::f64::consts::PI,
            "e" => std::f64::consts::E,
            _ => return Err(error!(UnknownFunction; &format!("'{}'", name))),
        };
        Ok(Val::Number(num))
    }
}
