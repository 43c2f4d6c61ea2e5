use crate::error::{PricingError, PricingResult};
#[cfg(feature = "serde")]
use crate::models::pnl::{validate_spots, PnlMethod};

/// Market and contract parameters for a single evaluation.
///
/// A plain `Copy` value: every pricing, Greeks and PnL call receives one
/// explicitly, so there is no ambient "current parameter" state anywhere in
/// the crate. Construction never fails; the domain is checked by
/// [`PricingInputs::validate`], which every entry point calls first.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingInputs {
    /// Spot price of the underlying (S)
    pub spot: f64,
    /// Strike price (X)
    pub strike: f64,
    /// Continuously compounded risk-free rate (r)
    pub rate: f64,
    /// Annualized volatility as decimal (σ, e.g. 0.2 for 20%)
    pub volatility: f64,
    /// Time to maturity in years (T)
    pub maturity: f64,
}

impl Default for PricingInputs {
    /// Initial widget values of the pricing dashboard.
    fn default() -> Self {
        Self {
            spot: 100.0,
            strike: 100.0,
            rate: 0.05,
            volatility: 0.2,
            maturity: 1.0,
        }
    }
}

impl PricingInputs {
    pub fn new(spot: f64, strike: f64, rate: f64, volatility: f64, maturity: f64) -> Self {
        Self {
            spot,
            strike,
            rate,
            volatility,
            maturity,
        }
    }

    /// Copy of these inputs with a different spot price.
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// Check the inputs against the domain of the closed-form model.
    ///
    /// # Errors
    ///
    /// [`PricingError::InvalidInput`] when any field is non-finite, when
    /// `spot <= 0`, `strike <= 0`, `volatility < 0` or `maturity < 0`.
    pub fn validate(&self) -> PricingResult<()> {
        let fields = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("rate", self.rate),
            ("volatility", self.volatility),
            ("maturity", self.maturity),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(PricingError::invalid(field, value, "must be finite"));
            }
        }

        if self.spot <= 0.0 {
            return Err(PricingError::invalid("spot", self.spot, "must be positive"));
        }
        if self.strike <= 0.0 {
            return Err(PricingError::invalid(
                "strike",
                self.strike,
                "must be positive",
            ));
        }
        if self.volatility < 0.0 {
            return Err(PricingError::invalid(
                "volatility",
                self.volatility,
                "must be non-negative",
            ));
        }
        if self.maturity < 0.0 {
            return Err(PricingError::invalid(
                "maturity",
                self.maturity,
                "must be non-negative",
            ));
        }
        Ok(())
    }

    /// True when `σ = 0` or `T = 0`, where d1/d2 are undefined and prices
    /// collapse to the discounted intrinsic value.
    pub fn is_degenerate(&self) -> bool {
        self.volatility == 0.0 || self.maturity == 0.0
    }

    /// Discount factor `e^(-rT)`.
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }
}

/// Model fair values for the call and the put.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriceResult {
    pub call: f64,
    pub put: f64,
}

/// Risk sensitivities for the call and the put.
///
/// Gamma and vega are identical for both legs under Black-Scholes, so they
/// are stored once.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksResult {
    /// ∂C/∂S, in [0, 1]
    pub call_delta: f64,
    /// ∂P/∂S, in [-1, 0]
    pub put_delta: f64,
    /// ∂²V/∂S², shared by call and put
    pub gamma: f64,
    /// ∂V/∂σ per unit volatility, shared by call and put
    pub vega: f64,
    /// Calendar decay of the call (negative of ∂C/∂T), per year
    pub call_theta: f64,
    /// Calendar decay of the put (negative of ∂P/∂T), per year
    pub put_theta: f64,
    /// ∂C/∂r per unit rate
    pub call_rho: f64,
    /// ∂P/∂r per unit rate
    pub put_rho: f64,
}

impl GreeksResult {
    /// Vega for a one vol-point (1%) move instead of a unit move.
    pub fn vega_per_point(&self) -> f64 {
        self.vega * 0.01
    }
}

/// Unit in which vega is reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VegaConvention {
    /// Sensitivity to a move of 1.0 in σ (i.e. 100 vol-points)
    #[default]
    PerUnit,
    /// Sensitivity to a move of 0.01 in σ
    PerPoint,
}

impl VegaConvention {
    /// Rescale Greeks computed per unit volatility into this convention.
    pub fn apply(self, greeks: GreeksResult) -> GreeksResult {
        match self {
            VegaConvention::PerUnit => greeks,
            VegaConvention::PerPoint => GreeksResult {
                vega: greeks.vega_per_point(),
                ..greeks
            },
        }
    }
}

/// One sample of the PnL curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PnlPoint {
    /// Hypothetical underlying price
    pub spot: f64,
    /// PnL of a long call at this spot
    pub call_pnl: f64,
    /// PnL of a long put at this spot
    pub put_pnl: f64,
}

/// Ordered PnL samples with strictly increasing spot prices.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PnlSeries {
    points: Vec<PnlPoint>,
}

// Decoded samples must satisfy the same ordering as generated ones
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PnlSeries {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            points: Vec<PnlPoint>,
        }

        let raw = Raw::deserialize(deserializer)?;
        if !raw.points.is_empty() {
            let spots: Vec<f64> = raw.points.iter().map(|p| p.spot).collect();
            validate_spots(&spots, PnlMethod::ExpiryPayoff).map_err(serde::de::Error::custom)?;
        }
        Ok(Self::from_sorted(raw.points))
    }
}

/// Spot levels at which each leg's PnL crosses zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakevens {
    pub call: Option<f64>,
    pub put: Option<f64>,
}

impl PnlSeries {
    /// Wrap points that are already sorted by strictly increasing spot.
    pub(crate) fn from_sorted(points: Vec<PnlPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PnlPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PnlPoint> {
        self.points.iter()
    }

    pub fn spots(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.spot).collect()
    }

    pub fn call_pnl(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.call_pnl).collect()
    }

    pub fn put_pnl(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.put_pnl).collect()
    }

    /// Break-even spots of both legs within the swept range.
    ///
    /// The crossing is linearly interpolated between the two samples that
    /// bracket it; a leg that never changes sign inside the sweep yields
    /// `None`.
    pub fn breakevens(&self) -> Breakevens {
        Breakevens {
            call: zero_crossing(&self.points, |p| p.call_pnl),
            put: zero_crossing(&self.points, |p| p.put_pnl),
        }
    }
}

impl IntoIterator for PnlSeries {
    type Item = PnlPoint;
    type IntoIter = std::vec::IntoIter<PnlPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a PnlSeries {
    type Item = &'a PnlPoint;
    type IntoIter = std::slice::Iter<'a, PnlPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

fn zero_crossing(points: &[PnlPoint], pnl: impl Fn(&PnlPoint) -> f64) -> Option<f64> {
    if let Some(first) = points.first() {
        if pnl(first) == 0.0 {
            return Some(first.spot);
        }
    }

    points.windows(2).find_map(|pair| {
        let (x1, y1) = (pair[0].spot, pnl(&pair[0]));
        let (x2, y2) = (pair[1].spot, pnl(&pair[1]));

        if y2 == 0.0 {
            return Some(x2);
        }
        if (y1 < 0.0) != (y2 < 0.0) && y1 != 0.0 {
            // Linear interpolation between the bracketing samples
            return Some(x1 + (x2 - x1) * (-y1) / (y2 - y1));
        }
        None
    })
}

/// Everything the dashboard displays for one set of inputs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvaluationSnapshot {
    /// The inputs this snapshot was computed from
    pub inputs: PricingInputs,
    pub prices: PriceResult,
    /// Greeks with vega expressed in `vega_convention`
    pub greeks: GreeksResult,
    pub vega_convention: VegaConvention,
    pub pnl: PnlSeries,
}
