//! # Equation Registry
//!
//! Central registry of all formulas used by the calculators.
//! Each equation has metadata including its reference, formulas, and variable definitions.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe equation identification via the `Equation` enum
//! - Full metadata for reports, the GUI formula panel and audit trails
//! - Serialization support for JSON export
//!
//! ## Usage
//!
//! ```rust
//! use calc_core::equations::registry::{Equation, EquationTracker};
//!
//! // Track equation usage during calculation
//! let mut tracker = EquationTracker::new();
//! tracker.record(Equation::CantileverTipDeflection);
//!
//! // Get metadata for display
//! let meta = Equation::CantileverTipDeflection.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

// ============================================================================
// References
// ============================================================================

/// Source of a formula.
///
/// Every equation cites where it comes from, including the ones that are
/// policy rather than physics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// Roark's Formulas for Stress and Strain
    Roarks {
        edition: u8,
        table: &'static str,
        case: &'static str,
    },
    /// Engineering Mechanics: Dynamics by R.C. Hibbeler
    Hibbeler { edition: u8, chapter: u8 },
    /// An estimating rule with no physical derivation
    Placeholder { note: &'static str },
    /// Fundamental mechanics (no specific reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Roarks { edition, table, case } => {
                format!("Roark's {}ed, {}, Case {}", edition, table, case)
            }
            CodeReference::Hibbeler { edition, chapter } => {
                format!("Hibbeler Dynamics {}ed, Ch. {}", edition, chapter)
            }
            CodeReference::Placeholder { note } => format!("Placeholder - {}", note),
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::Roarks { .. } => "Roark's",
            CodeReference::Hibbeler { .. } => "Hibbeler",
            CodeReference::Placeholder { .. } => "Placeholder",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for grouping equations in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// How the actuator's acceleration is obtained
    AccelerationModel,
    /// Traversal time and profile selection
    TraversalTime,
    /// Sampled position / speed curves
    MotionCurves,
    /// Support reactions and fixed-end moments
    Reactions,
    /// Deflection calculations
    Deflections,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::AccelerationModel => "Acceleration Model",
            EquationCategory::TraversalTime => "Traversal Time",
            EquationCategory::MotionCurves => "Motion Curves",
            EquationCategory::Reactions => "Reactions",
            EquationCategory::Deflections => "Deflections",
        }
    }

    /// Sort order for reports (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::AccelerationModel => 1,
            EquationCategory::TraversalTime => 2,
            EquationCategory::MotionCurves => 3,
            EquationCategory::Reactions => 4,
            EquationCategory::Deflections => 5,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "a", "L", "w")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "mm/s", "m", "N/m")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for a formula.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Cantilever Tip Deflection")
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in LaTeX math notation
    pub formula_latex: &'static str,
    /// The formula in plain text (human-readable)
    pub formula_plain: &'static str,
    /// Reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation (for linking)
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All formulas used by the calculators.
///
/// Each variant maps to a specific formula with full metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // -------------------------------------------------------------------------
    // Actuator
    // -------------------------------------------------------------------------
    /// a = k·P (k = 10 mm/s² per W by default)
    AccelerationFromPower,
    /// d_accel = v²/(2a)
    AccelerationDistance,
    /// T = 2·v/a + (s - 2·d_accel)/v
    TrapezoidalTraversalTime,
    /// T = 2·√(2s/a)
    TriangularTraversalTime,
    /// d(t) = min(min(at²/2, s), s - a(T-t)²/2)
    EnvelopePosition,
    /// Three-phase v(t)
    PiecewiseSpeed,

    // -------------------------------------------------------------------------
    // Cantilever Beam
    // -------------------------------------------------------------------------
    /// R = wL, M = wL²/2
    CantileverUniformReactions,
    /// δ = wL⁴/(8EI)
    CantileverTipDeflection,
    /// δ(x) = wx²(3L - x)/(6EI)
    CantileverDeflectionCurve,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::AccelerationFromPower => EquationMetadata {
                name: "Acceleration from Motor Power",
                description: "Linear proxy mapping motor power to the move's acceleration",
                formula_latex: r"a = k \cdot P",
                formula_plain: "a = k * P (k = 10 mm/s^2 per W)",
                reference: CodeReference::Placeholder {
                    note: "no torque or force model; replace via AccelerationModel",
                },
                variables: vec![
                    Variable::new("a", "Acceleration", "mm/s^2"),
                    Variable::new("P", "Motor power", "W"),
                    Variable::new("k", "Acceleration per watt", "mm/s^2/W"),
                ],
                assumptions: vec![
                    "Not a physical law - an estimating placeholder",
                    "Same magnitude for acceleration and deceleration",
                ],
                category: EquationCategory::AccelerationModel,
                source_module: "calculations/actuator.rs",
                source_function: "AccelerationModel::acceleration_mm_s2",
            },

            Equation::AccelerationDistance => EquationMetadata {
                name: "Acceleration Distance",
                description: "Distance needed to reach peak speed from rest; selects the profile",
                formula_latex: r"d_{accel} = \frac{v^2}{2a}",
                formula_plain: "d_accel = v^2 / (2a); trapezoidal if 2*d_accel < s",
                reference: CodeReference::Hibbeler { edition: 14, chapter: 12 },
                variables: vec![
                    Variable::new("v", "Peak speed", "mm/s"),
                    Variable::new("a", "Acceleration", "mm/s^2"),
                    Variable::new("s", "Stroke length", "mm"),
                ],
                assumptions: vec!["Starts from rest", "Constant acceleration"],
                category: EquationCategory::TraversalTime,
                source_module: "equations/kinematics.rs",
                source_function: "acceleration_distance",
            },

            Equation::TrapezoidalTraversalTime => EquationMetadata {
                name: "Trapezoidal Traversal Time",
                description: "Total time when the move reaches peak speed and cruises",
                formula_latex: r"T = 2\frac{v}{a} + \frac{s - 2 d_{accel}}{v}",
                formula_plain: "T = 2*(v/a) + (s - 2*d_accel)/v",
                reference: CodeReference::Hibbeler { edition: 14, chapter: 12 },
                variables: vec![
                    Variable::new("T", "Total traversal time", "s"),
                    Variable::new("s", "Stroke length", "mm"),
                    Variable::new("v", "Peak speed", "mm/s"),
                    Variable::new("a", "Acceleration", "mm/s^2"),
                ],
                assumptions: vec!["Symmetric accelerate / decelerate ramps", "Starts and ends at rest"],
                category: EquationCategory::TraversalTime,
                source_module: "equations/kinematics.rs",
                source_function: "trapezoidal_phase_times",
            },

            Equation::TriangularTraversalTime => EquationMetadata {
                name: "Triangular Traversal Time",
                description: "Total time when peak speed is never reached",
                formula_latex: r"T = 2\sqrt{\frac{2s}{a}}",
                formula_plain: "T = 2 * sqrt(2s/a)",
                reference: CodeReference::Hibbeler { edition: 14, chapter: 12 },
                variables: vec![
                    Variable::new("T", "Total traversal time", "s"),
                    Variable::new("s", "Stroke length", "mm"),
                    Variable::new("a", "Acceleration", "mm/s^2"),
                ],
                assumptions: vec!["Symmetric accelerate / decelerate ramps", "Starts and ends at rest"],
                category: EquationCategory::TraversalTime,
                source_module: "equations/kinematics.rs",
                source_function: "triangular_accel_time",
            },

            Equation::EnvelopePosition => EquationMetadata {
                name: "Position Envelope",
                description: "Position over time as the lower envelope of the forward and backward parabolas",
                formula_latex: r"d(t) = \min\left(\min\left(\tfrac{1}{2}at^2, s\right), s - \tfrac{1}{2}a(T - t)^2\right)",
                formula_plain: "d(t) = min(min(a*t^2/2, s), s - a*(T-t)^2/2)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("d", "Position", "mm"),
                    Variable::new("t", "Time", "s"),
                    Variable::new("T", "Total traversal time", "s"),
                ],
                assumptions: vec![
                    "Approximation - not a piecewise reconstruction of the phases",
                    "Starts below zero at s - a*T^2/2",
                ],
                category: EquationCategory::MotionCurves,
                source_module: "equations/kinematics.rs",
                source_function: "envelope_position",
            },

            Equation::PiecewiseSpeed => EquationMetadata {
                name: "Piecewise Speed",
                description: "Speed over time as accelerate / cruise / decelerate phases",
                formula_latex: r"v(t) = \begin{cases} at & t < t_a \\ v & t_a \le t < T - t_a \\ v - a(t - (T - t_a)) & \text{otherwise} \end{cases}",
                formula_plain: "v(t) = a*t for t < t_a; v for t_a <= t < T - t_a; v - a*(t - (T - t_a)) otherwise",
                reference: CodeReference::Hibbeler { edition: 14, chapter: 12 },
                variables: vec![
                    Variable::new("v(t)", "Speed", "mm/s"),
                    Variable::new("t_a", "Acceleration time v/a", "s"),
                ],
                assumptions: vec!["Independent of the position envelope"],
                category: EquationCategory::MotionCurves,
                source_module: "equations/kinematics.rs",
                source_function: "piecewise_speed",
            },

            Equation::CantileverUniformReactions => EquationMetadata {
                name: "Cantilever Uniform Load Reactions",
                description: "Vertical reaction and fixed-end moment at the support",
                formula_latex: r"R = wL, \quad M_{fixed} = \frac{wL^2}{2}",
                formula_plain: "R = wL, M_fixed = wL^2/2",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "2a" },
                variables: vec![
                    Variable::new("R", "Support reaction", "N"),
                    Variable::new("M_fixed", "Fixed-end moment", "N*m"),
                    Variable::new("w", "Uniform load", "N/m"),
                    Variable::new("L", "Beam length", "m"),
                ],
                assumptions: vec!["Fixed-free", "Load over full length"],
                category: EquationCategory::Reactions,
                source_module: "equations/cantilever.rs",
                source_function: "uniform_load_reactions",
            },

            Equation::CantileverTipDeflection => EquationMetadata {
                name: "Cantilever Tip Deflection",
                description: "Deflection at the free end under a uniformly distributed load",
                formula_latex: r"\delta = \frac{w L^4}{8 E I}",
                formula_plain: "delta = wL^4 / (8EI)",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "2a" },
                variables: vec![
                    Variable::new("delta", "Tip deflection", "m"),
                    Variable::new("w", "Uniform load", "N/m"),
                    Variable::new("L", "Beam length", "m"),
                    Variable::new("E", "Modulus of elasticity", "Pa"),
                    Variable::new("I", "Moment of inertia", "m^4"),
                ],
                assumptions: vec!["Linear elastic material", "Small deflections", "Prismatic beam"],
                category: EquationCategory::Deflections,
                source_module: "equations/cantilever.rs",
                source_function: "uniform_load_tip_deflection",
            },

            Equation::CantileverDeflectionCurve => EquationMetadata {
                name: "Deflection Along the Length",
                description: "Deflection at position x from the fixed end",
                formula_latex: r"\delta(x) = \frac{w x^2}{6 E I} \left( 3L - x \right)",
                formula_plain: "delta(x) = w*x^2*(3L - x) / (6EI)",
                reference: CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "1a" },
                variables: vec![
                    Variable::new("delta(x)", "Deflection at x", "m"),
                    Variable::new("x", "Position from fixed end", "m"),
                ],
                assumptions: vec![
                    "Gives wL^3/(3EI) at x = L, not the tip formula's wL^4/(8EI)",
                    "Point-load shape with w in place of P",
                ],
                category: EquationCategory::Deflections,
                source_module: "equations/cantilever.rs",
                source_function: "deflection_along_length",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories that contain at least one equation
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![AccelerationModel, TraversalTime, MotionCurves, Reactions, Deflections];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    // Actuator
    Equation::AccelerationFromPower,
    Equation::AccelerationDistance,
    Equation::TrapezoidalTraversalTime,
    Equation::TriangularTraversalTime,
    Equation::EnvelopePosition,
    Equation::PiecewiseSpeed,
    // Cantilever
    Equation::CantileverUniformReactions,
    Equation::CantileverTipDeflection,
    Equation::CantileverDeflectionCurve,
];

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Collector for equation usage during a calculation.
///
/// The calculation functions record into one of these; results carry the
/// deduplicated list so front ends can show the formulas that produced them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquationTracker {
    used: Vec<Equation>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation) {
        self.used.push(equation);
    }

    /// Get unique equations used (deduplicated, in first-use order)
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.used.iter().copied().filter(|eq| seen.insert(*eq)).collect()
    }

    /// Group unique equations by category, categories in report order
    pub fn by_category(&self) -> Vec<(EquationCategory, Vec<Equation>)> {
        let unique = self.unique_equations();
        let mut by_cat: HashMap<EquationCategory, Vec<Equation>> = HashMap::new();

        for eq in unique {
            let cat = eq.metadata().category;
            by_cat.entry(cat).or_default().push(eq);
        }

        let mut result: Vec<_> = by_cat.into_iter().collect();
        result.sort_by_key(|(cat, _)| cat.sort_order());
        result
    }
}

/// Plain-text "formulas used" listing for a set of equations.
///
/// One line per equation, grouped by category. The CLI prints this under
/// its text reports.
pub fn formulas_summary(equations: &[Equation]) -> String {
    let mut tracker = EquationTracker::new();
    for &eq in equations {
        tracker.record(eq);
    }

    let mut output = String::new();
    for (category, eqs) in tracker.by_category() {
        output.push_str(&format!("{}:\n", category.display_name()));
        for eq in eqs {
            let meta = eq.metadata();
            output.push_str(&format!("  {:<34} {}\n", meta.name, meta.formula_plain));
        }
    }
    output
}

// ============================================================================
// Markdown Generation for EQUATIONS.md
// ============================================================================

/// Generate a complete EQUATIONS.md file for documentation.
///
/// This function produces a markdown document listing all equations in the registry,
/// organized by category, with formulas, references, and source code links.
///
/// # Example
///
/// ```rust
/// use calc_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Mechcalc Equations Reference"));
/// assert!(markdown.contains("Deflections"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(12_000);

    // Header
    output.push_str(r#"# Mechcalc Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists all formulas used by the actuator and cantilever calculators.
Each equation includes its formula, reference, source location, and assumptions.

## Sign Conventions

| Quantity | Positive Direction |
|----------|-------------------|
| Position | Along the stroke, away from the start |
| Speed | Along the stroke |
| Loads | Downward (gravity direction) |
| Deflection | Downward |
| Reactions | Upward (resisting gravity) |

---

"#);

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));
            output.push_str(&format!("$$ {} $$\n\n", meta.formula_latex));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));

            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output.push_str(r#"## How to Audit

1. Find the equation you want to verify in the sections above
2. Check the **Reference** for where each formula comes from
3. Click the **Source** link to view the implementation code
4. Run `cargo test` to verify equations against known values
"#);

    output
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 9);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_latex.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
        }

        let tip = Equation::CantileverTipDeflection.metadata();
        assert!(tip.formula_plain.contains("wL^4 / (8EI)"), "Tip deflection formula wrong");
    }

    #[test]
    fn test_code_reference_citation() {
        let roark = CodeReference::Roarks { edition: 8, table: "Table 8.1", case: "2a" };
        assert_eq!(roark.citation(), "Roark's 8ed, Table 8.1, Case 2a");

        let placeholder = CodeReference::Placeholder { note: "tbd" };
        assert_eq!(placeholder.citation(), "Placeholder - tbd");
        assert_eq!(placeholder.short_form(), "Placeholder");
    }

    #[test]
    fn test_acceleration_proxy_is_flagged_as_placeholder() {
        let meta = Equation::AccelerationFromPower.metadata();
        assert_eq!(meta.reference.short_form(), "Placeholder");
    }

    #[test]
    fn test_equation_tracker() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::AccelerationDistance);
        tracker.record(Equation::TriangularTraversalTime);
        tracker.record(Equation::AccelerationDistance);

        assert_eq!(
            tracker.unique_equations(),
            vec![Equation::AccelerationDistance, Equation::TriangularTraversalTime]
        );
    }

    #[test]
    fn test_by_category() {
        let mut tracker = EquationTracker::new();
        tracker.record(Equation::CantileverDeflectionCurve);
        tracker.record(Equation::CantileverUniformReactions);
        tracker.record(Equation::CantileverTipDeflection);

        let by_cat = tracker.by_category();
        assert_eq!(by_cat.len(), 2);
        assert_eq!(by_cat[0].0, EquationCategory::Reactions);
        assert_eq!(by_cat[1].0, EquationCategory::Deflections);
        assert_eq!(by_cat[1].1.len(), 2);
    }

    #[test]
    fn test_categories_sorted() {
        let cats = Equation::all_categories();
        let orders: Vec<u8> = cats.iter().map(|c| c.sort_order()).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        assert_eq!(orders, sorted, "Categories should be sorted by sort_order");
    }

    #[test]
    fn test_formulas_summary() {
        let summary = formulas_summary(&[Equation::CantileverTipDeflection, Equation::CantileverUniformReactions]);
        let reactions_at = summary.find("Reactions:").unwrap();
        let deflections_at = summary.find("Deflections:").unwrap();
        assert!(reactions_at < deflections_at);
        assert!(summary.contains("delta = wL^4 / (8EI)"));
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();

        assert!(markdown.contains("# Mechcalc Equations Reference"), "Missing title");
        assert!(markdown.contains("Auto-generated from source code"), "Missing auto-gen notice");
        assert!(markdown.contains("## Sign Conventions"), "Missing sign conventions");

        for cat in Equation::all_categories() {
            assert!(
                markdown.contains(&format!("## {}", cat.display_name())),
                "Missing category {:?}",
                cat
            );
        }

        assert!(markdown.contains("### Cantilever Tip Deflection"));
        assert!(markdown.contains("`delta = wL^4 / (8EI)`"));
        assert!(markdown.contains("equations/kinematics.rs"), "Missing kinematics.rs source");
        assert!(markdown.contains("**Total Equations:** 9"), "Wrong equation count");
        assert!(markdown.contains("**Categories:** 5"), "Wrong category count");
        assert!(markdown.contains("## How to Audit"), "Missing audit section");
    }

    #[test]
    fn test_equation_metadata_has_source_info() {
        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.source_module.is_empty(), "Equation {:?} missing source_module", eq);
            assert!(!meta.source_function.is_empty(), "Equation {:?} missing source_function", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} missing formula_plain", eq);
        }
    }
}
