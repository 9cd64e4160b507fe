#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    code: u16,
    line: Option<usize>,
    message: Option<String>,
}

#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::from_code($crate::lang::ErrorCode::$err)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::from_code($crate::lang::ErrorCode::$err).message($msg)
    };
}

impl Error {
    pub fn from_code(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line: None,
            message: None,
        }
    }

    pub fn message(mut self, message: &str) -> Error {
        self.message = Some(message.to_string());
        self
    }

    pub fn in_line_number(mut self, line: usize) -> Error {
        if self.line.is_none() {
            self.line = Some(line);
        }
        self
    }
}

#[repr(u16)]
pub enum ErrorCode {
    SyntaxError = 2,
    UnknownFunction = 5,
    SubscriptOutOfRange = 9,
    DivisionByZero = 11,
    ModuloByZero = 12,
    InternalError = 51,
    FileNotFound = 53,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self.code {
            2 => "SYNTAX ERROR",
            5 => "UNKNOWN FUNCTION",
            9 => "SUBSCRIPT OUT OF RANGE",
            11 => "DIVISION BY ZERO",
            12 => "MODULO BY ZERO",
            51 => "INTERNAL ERROR",
            53 => "FILE NOT FOUND",
            _ => "",
        };
        if s.is_empty() {
            write!(f, "PROGRAM ERROR {}", self.code)?;
        } else {
            write!(f, "{}", s)?;
        }
        if let Some(message) = &self.message {
            write!(f, " {}", message)?;
        }
        if let Some(line) = self.line {
            write!(f, " IN LINE {}", line)?;
        }
        Ok(())
    }
}
