//! Operation and memory-action tags
//!
//! The HTTP boundary dispatches through explicit enums instead of string
//! method lookup: names are parsed once, unknown names are rejected before
//! any parameter decoding happens.

/// The 17 calculator operations, identified by their wire names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    SquareRoot,
    Sine,
    Cosine,
    Tangent,
    Mean,
    Median,
    StandardDeviation,
    Variance,
    Maximum,
    Minimum,
    EvaluateExpression,
    ConvertTemperature,
}

impl Operation {
    /// Every supported operation, in the order advertised by the API
    pub const ALL: [Operation; 17] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::SquareRoot,
        Operation::Sine,
        Operation::Cosine,
        Operation::Tangent,
        Operation::Mean,
        Operation::Median,
        Operation::StandardDeviation,
        Operation::Variance,
        Operation::Maximum,
        Operation::Minimum,
        Operation::EvaluateExpression,
        Operation::ConvertTemperature,
    ];

    /// Parse a wire name; `None` for anything outside the table
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "sumar" => Some(Self::Add),
            "restar" => Some(Self::Subtract),
            "multiplicar" => Some(Self::Multiply),
            "dividir" => Some(Self::Divide),
            "potencia" => Some(Self::Power),
            "raizCuadrada" => Some(Self::SquareRoot),
            "seno" => Some(Self::Sine),
            "coseno" => Some(Self::Cosine),
            "tangente" => Some(Self::Tangent),
            "media" => Some(Self::Mean),
            "mediana" => Some(Self::Median),
            "desviacionEstandar" => Some(Self::StandardDeviation),
            "varianza" => Some(Self::Variance),
            "maximo" => Some(Self::Maximum),
            "minimo" => Some(Self::Minimum),
            "evaluarExpresion" => Some(Self::EvaluateExpression),
            "convertirTemperatura" => Some(Self::ConvertTemperature),
            _ => None,
        }
    }

    /// Wire name of this operation
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "sumar",
            Self::Subtract => "restar",
            Self::Multiply => "multiplicar",
            Self::Divide => "dividir",
            Self::Power => "potencia",
            Self::SquareRoot => "raizCuadrada",
            Self::Sine => "seno",
            Self::Cosine => "coseno",
            Self::Tangent => "tangente",
            Self::Mean => "media",
            Self::Median => "mediana",
            Self::StandardDeviation => "desviacionEstandar",
            Self::Variance => "varianza",
            Self::Maximum => "maximo",
            Self::Minimum => "minimo",
            Self::EvaluateExpression => "evaluarExpresion",
            Self::ConvertTemperature => "convertirTemperatura",
        }
    }
}

/// Actions accepted by the memory endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryAction {
    Save,
    Read,
    Clear,
}

impl MemoryAction {
    /// Parse a wire action name (`guardar`, `obtener`, `limpiar`)
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "guardar" => Some(Self::Save),
            "obtener" => Some(Self::Read),
            "limpiar" => Some(Self::Clear),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Save => "guardar",
            Self::Read => "obtener",
            Self::Clear => "limpiar",
        }
    }
}
