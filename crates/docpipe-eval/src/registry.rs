//! Function signatures and name resolution
//!
//! Every [`Function`] declares the dynamic types each parameter accepts. The
//! evaluator checks arity and argument types against the signature before it
//! invokes a primitive, so primitives only see arguments of accepted types.

use crate::error::{EvalError, EvalResult};
use crate::function::Function;
use docpipe_types::{Value, ValueType};
use std::collections::HashMap;
use std::fmt;

const STRING: &[ValueType] = &[ValueType::String];
const STRING_OR_NULL: &[ValueType] = &[ValueType::String, ValueType::Null];
const STRING_OR_BYTES: &[ValueType] = &[ValueType::String, ValueType::Bytes];
const STRING_BYTES_OR_NULL: &[ValueType] = &[ValueType::String, ValueType::Bytes, ValueType::Null];
const INT64: &[ValueType] = &[ValueType::Int64];
const TIMESTAMP: &[ValueType] = &[ValueType::Timestamp];

/// A declared function parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name
    pub name: &'static str,
    /// Accepted dynamic types
    pub accepts: &'static [ValueType],
}

impl Parameter {
    const fn new(name: &'static str, accepts: &'static [ValueType]) -> Self {
        Self { name, accepts }
    }

    /// Check whether a value of the given type may be passed
    pub fn accepts(&self, value_type: ValueType) -> bool {
        self.accepts.contains(&value_type)
    }

    /// Human readable description of the accepted types
    pub fn expected(&self) -> String {
        self.accepts
            .iter()
            .map(ValueType::name)
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

/// Result type of a function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Returns {
    /// Always the given type
    Type(ValueType),
    /// The type of the first argument
    SameAsFirst,
}

impl fmt::Display for Returns {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(t) => write!(f, "{}", t),
            Self::SameAsFirst => write!(f, "same as first argument"),
        }
    }
}

/// Declared shape of a function call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionSignature {
    /// The function described
    pub function: Function,
    /// Parameters in call order; a variadic function repeats the last one
    pub parameters: &'static [Parameter],
    /// Whether the last parameter may repeat
    pub variadic: bool,
    /// Result type
    pub returns: Returns,
}

impl FunctionSignature {
    const fn fixed(function: Function, parameters: &'static [Parameter], returns: Returns) -> Self {
        Self {
            function,
            parameters,
            variadic: false,
            returns,
        }
    }

    /// Whether a `Null` argument yields `Null` instead of an error
    pub fn propagates_null(&self) -> bool {
        self.parameters.iter().any(|p| p.accepts(ValueType::Null))
    }

    /// Describe the accepted argument count
    pub fn arity(&self) -> String {
        if self.variadic {
            format!("at least {}", self.parameters.len())
        } else {
            self.parameters.len().to_string()
        }
    }

    /// Check the argument count
    pub fn check_arity(&self, found: usize) -> EvalResult<()> {
        let required = self.parameters.len();
        let ok = if self.variadic {
            found >= required
        } else {
            found == required
        };
        if ok {
            Ok(())
        } else {
            Err(EvalError::arity(self.function.name(), self.arity(), found))
        }
    }

    /// Check the argument count and every argument's dynamic type
    pub fn check_args(&self, args: &[Value]) -> EvalResult<()> {
        self.check_arity(args.len())?;
        for (index, arg) in args.iter().enumerate() {
            let param = self.parameter(index);
            if !param.accepts(arg.value_type()) {
                return Err(EvalError::type_mismatch(
                    self.function.name(),
                    param.expected(),
                    arg.value_type(),
                ));
            }
        }
        Ok(())
    }

    fn parameter(&self, index: usize) -> &Parameter {
        let last = self.parameters.len() - 1;
        &self.parameters[index.min(last)]
    }
}

impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function.name())?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let accepts: Vec<_> = param.accepts.iter().map(ValueType::name).collect();
            write!(f, "{}: {}", param.name, accepts.join(" | "))?;
        }
        if self.variadic {
            write!(f, ", ...")?;
        }
        write!(f, ") -> {}", self.returns)
    }
}

impl Function {
    /// Get the declared signature
    pub const fn signature(&self) -> FunctionSignature {
        use Returns::{SameAsFirst, Type};

        const TIMESTAMP_ARG: &[Parameter] = &[Parameter::new("timestamp", TIMESTAMP)];
        const INT64_ARG: &[Parameter] = &[Parameter::new("value", INT64)];
        const TIMESTAMP_ARITHMETIC: &[Parameter] = &[
            Parameter::new("timestamp", TIMESTAMP),
            Parameter::new("unit", STRING),
            Parameter::new("amount", INT64),
        ];
        const STRING_ARG: &[Parameter] = &[Parameter::new("value", STRING)];
        const NULLABLE_STRING_ARG: &[Parameter] = &[Parameter::new("value", STRING_OR_NULL)];
        const BINARY_ARG: &[Parameter] = &[Parameter::new("value", STRING_OR_BYTES)];
        const NULLABLE_BINARY_ARG: &[Parameter] = &[Parameter::new("value", STRING_BYTES_OR_NULL)];
        const SUBSTRING_ARGS: &[Parameter] = &[
            Parameter::new("value", STRING_OR_BYTES),
            Parameter::new("position", INT64),
            Parameter::new("length", INT64),
        ];
        const STRING_PAIR: &[Parameter] = &[
            Parameter::new("value", STRING),
            Parameter::new("operand", STRING),
        ];
        const PATTERN_PAIR: &[Parameter] = &[
            Parameter::new("value", STRING),
            Parameter::new("pattern", STRING),
        ];

        match self {
            Self::TimestampToUnixSeconds
            | Self::TimestampToUnixMillis
            | Self::TimestampToUnixMicros => {
                FunctionSignature::fixed(*self, TIMESTAMP_ARG, Type(ValueType::Int64))
            }
            Self::UnixSecondsToTimestamp
            | Self::UnixMillisToTimestamp
            | Self::UnixMicrosToTimestamp => {
                FunctionSignature::fixed(*self, INT64_ARG, Type(ValueType::Timestamp))
            }
            Self::TimestampAdd | Self::TimestampSub => {
                FunctionSignature::fixed(*self, TIMESTAMP_ARITHMETIC, Type(ValueType::Timestamp))
            }
            Self::ByteLength => FunctionSignature::fixed(*self, BINARY_ARG, Type(ValueType::Int64)),
            Self::CharLength => FunctionSignature::fixed(*self, STRING_ARG, Type(ValueType::Int64)),
            Self::Substring => FunctionSignature::fixed(*self, SUBSTRING_ARGS, SameAsFirst),
            Self::Reverse => FunctionSignature::fixed(*self, NULLABLE_BINARY_ARG, SameAsFirst),
            Self::StartsWith | Self::EndsWith | Self::StrContains => {
                FunctionSignature::fixed(*self, STRING_PAIR, Type(ValueType::Boolean))
            }
            Self::StrConcat => FunctionSignature {
                function: *self,
                parameters: STRING_ARG,
                variadic: true,
                returns: Type(ValueType::String),
            },
            Self::ToLower | Self::ToUpper | Self::Trim => {
                FunctionSignature::fixed(*self, NULLABLE_STRING_ARG, Type(ValueType::String))
            }
            Self::Like | Self::RegexContains | Self::RegexMatch => {
                FunctionSignature::fixed(*self, PATTERN_PAIR, Type(ValueType::Boolean))
            }
        }
    }
}

/// Resolves function names to the closed function set
///
/// SDK names (`byteLength`), wire names (`byte_length`) and aliases
/// (`strReverse`) all resolve.
#[derive(Debug, Clone)]
pub struct FunctionRegistry {
    by_name: HashMap<&'static str, Function>,
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl FunctionRegistry {
    /// Create a registry containing every supported function
    pub fn standard() -> Self {
        let mut by_name = HashMap::new();
        for function in Function::ALL {
            by_name.insert(function.name(), function);
            by_name.insert(function.wire_name(), function);
            for alias in function.aliases() {
                by_name.insert(*alias, function);
            }
        }
        Self { by_name }
    }

    /// Look up a function by any of its names
    pub fn resolve(&self, name: &str) -> Option<Function> {
        self.by_name.get(name).copied()
    }

    /// Look up a function by name, failing with an internal error
    pub fn get(&self, name: &str) -> EvalResult<Function> {
        self.resolve(name)
            .ok_or_else(|| EvalError::unknown_function(name))
    }

    /// Signatures of every function, in catalogue order
    pub fn signatures(&self) -> impl Iterator<Item = FunctionSignature> {
        Function::ALL.into_iter().map(|f| f.signature())
    }
}
