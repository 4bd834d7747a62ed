//! Labels angles as reduced fractions of a base constant, e.g. `3π/4`.
//!
//! The raw numerator is `round(denominator * value / base)`, with ties rounded
//! away from zero. Values that are not exact multiples of `base / denominator`
//! get the label of the nearest multiple.

use crate::error::{Error, Result};
use crate::math::{gcd, round_half_away, M_PI};

pub const PI_SYMBOL: &str = "π";
pub const TEX_PI_SYMBOL: &str = r"\pi";

/// Most ticks `MultipleOf::ticks` will lay out on one axis.
pub const MAX_TICKS: i64 = 1000;

/// How a `FractionLabel` is written out.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LabelStyle {
    /// `0`, `π`, `-2π`, `π/2`, `-3π/4`
    Plain,
    /// TeX math markup: `$0$`, `$\pi$`, `$\frac{-3\pi}{4}$`
    Tex,
}

impl Default for LabelStyle {
    fn default() -> Self {
        LabelStyle::Plain
    }
}

/// A value expressed as `(±numerator * base) / denominator`, reduced so that
/// numerator and denominator are coprime. `denominator >= 1`. Zero is never
/// negative.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FractionLabel {
    pub negative: bool,
    pub numerator: u64,
    pub denominator: u64,
}

impl FractionLabel {
    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// True when the value is an integer multiple of the base (including zero).
    pub fn is_whole_multiple(&self) -> bool {
        self.denominator == 1
    }

    /// True when the numerator is ±1, in which case it is not written.
    pub fn is_unit(&self) -> bool {
        self.numerator == 1
    }

    pub fn signed_numerator(&self) -> i64 {
        let n = self.numerator as i64;
        if self.negative {
            -n
        } else {
            n
        }
    }

    pub fn render(&self, symbol: &str, style: LabelStyle) -> String {
        let sign = if self.negative { "-" } else { "" };
        match style {
            LabelStyle::Plain => {
                if self.is_zero() {
                    "0".to_string()
                } else if self.is_whole_multiple() {
                    if self.is_unit() {
                        format!("{}{}", sign, symbol)
                    } else {
                        format!("{}{}{}", sign, self.numerator, symbol)
                    }
                } else if self.is_unit() {
                    format!("{}{}/{}", sign, symbol, self.denominator)
                } else {
                    format!("{}{}{}/{}", sign, self.numerator, symbol, self.denominator)
                }
            }
            LabelStyle::Tex => {
                if self.is_zero() {
                    "$0$".to_string()
                } else if self.is_whole_multiple() {
                    if self.is_unit() {
                        format!("${}{}$", sign, symbol)
                    } else {
                        format!("${}{}{}$", sign, self.numerator, symbol)
                    }
                } else if self.is_unit() {
                    format!("$\\frac{{{}{}}}{{{}}}$", sign, symbol, self.denominator)
                } else {
                    format!(
                        "$\\frac{{{}{}{}}}{{{}}}$",
                        sign, self.numerator, symbol, self.denominator
                    )
                }
            }
        }
    }
}

fn check_denominator(denominator: i64) -> Result<u64> {
    if denominator <= 0 {
        return Err(Error::InvalidDenominator(denominator));
    }
    Ok(denominator as u64)
}

fn check_base(base: f64) -> Result<f64> {
    if !base.is_finite() || base == 0.0 {
        return Err(Error::InvalidBase(base));
    }
    Ok(base)
}

fn reduce_checked(value: f64, denominator: u64, base: f64) -> Result<FractionLabel> {
    if !value.is_finite() {
        return Err(Error::NonFiniteAngle(value));
    }

    // How many (base / denominator) steps are in value, e.g. 1.5π has six π/4.
    let raw = round_half_away(denominator as f64 * value / base);
    let numerator = raw.unsigned_abs();
    let common = gcd(numerator, denominator);

    Ok(FractionLabel {
        negative: raw < 0,
        numerator: numerator / common,
        denominator: denominator / common,
    })
}

/// Reduces `value` to the nearest multiple of `base / denominator`.
pub fn reduce(value: f64, denominator: i64, base: f64) -> Result<FractionLabel> {
    let denominator = check_denominator(denominator)?;
    let base = check_base(base)?;
    reduce_checked(value, denominator, base)
}

/// Labels `value` as a plain-text multiple of π with the given denominator.
pub fn label(value: f64, denominator: i64) -> Result<String> {
    label_with(value, denominator, M_PI, PI_SYMBOL)
}

/// Labels `value` as a plain-text multiple of `base`, written with `symbol`.
pub fn label_with(value: f64, denominator: i64, base: f64, symbol: &str) -> Result<String> {
    Ok(reduce(value, denominator, base)?.render(symbol, LabelStyle::Plain))
}

/// Axis formatter for multiples of a base constant. Holds a validated
/// denominator and base, so formatting individual ticks only fails for
/// non-finite values.
#[derive(Clone, Debug, PartialEq)]
pub struct MultipleOf {
    denominator: u64,
    base: f64,
    symbol: String,
    style: LabelStyle,
}

impl MultipleOf {
    /// Multiples of π/denominator, plain text.
    pub fn new(denominator: i64) -> Result<Self> {
        Self::with_base(denominator, M_PI, PI_SYMBOL)
    }

    /// Multiples of π/denominator, TeX markup.
    pub fn tex(denominator: i64) -> Result<Self> {
        Ok(Self::with_base(denominator, M_PI, TEX_PI_SYMBOL)?.style(LabelStyle::Tex))
    }

    pub fn with_base(denominator: i64, base: f64, symbol: &str) -> Result<Self> {
        Ok(Self {
            denominator: check_denominator(denominator)?,
            base: check_base(base)?,
            symbol: symbol.to_string(),
            style: LabelStyle::Plain,
        })
    }

    pub fn style(mut self, style: LabelStyle) -> Self {
        self.style = style;
        self
    }

    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    pub fn base(&self) -> f64 {
        self.base
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Distance between major ticks.
    pub fn spacing(&self) -> f64 {
        self.base / self.denominator as f64
    }

    pub fn fraction(&self, value: f64) -> Result<FractionLabel> {
        reduce_checked(value, self.denominator, self.base)
    }

    pub fn format(&self, value: f64) -> Result<String> {
        Ok(self.fraction(value)?.render(&self.symbol, self.style))
    }

    /// Formatter callback shape used by the axis layer. The tick index does not
    /// affect the label.
    pub fn format_tick(&self, value: f64, _index: usize) -> Result<String> {
        self.format(value)
    }

    /// Tick positions in `[lo, hi]` that are integer multiples of `spacing()`.
    /// Fails if the range holds more than `MAX_TICKS` of them.
    pub fn ticks(&self, lo: f64, hi: f64) -> Result<Vec<f64>> {
        if !(lo.is_finite() && hi.is_finite()) || lo > hi {
            return Ok(Vec::new());
        }
        let step = self.spacing().abs();
        // tolerate rounding noise at the range ends
        const SLOP: f64 = 1e-9;
        let first = (lo / step - SLOP).ceil() as i64;
        let last = (hi / step + SLOP).floor() as i64;
        if last.saturating_sub(first) >= MAX_TICKS {
            return Err(Error::InvalidConfig(format!(
                "ticks every {}/{} over [{}, {}] exceed the limit of {}",
                self.symbol, self.denominator, lo, hi, MAX_TICKS
            )));
        }
        Ok((first..=last).map(|k| k as f64 * step).collect())
    }
}
