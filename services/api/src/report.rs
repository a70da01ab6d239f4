use crate::infra::{parse_date, parse_rating};
use crate::routes::{cost_calculator, scheme_catalog, CostCalculatorResponse, SchemeCatalogResponse};
use chrono::{Local, NaiveDate};
use clap::Args;
use epc_advisor::error::AppError;
use epc_advisor::input::{load_json, load_text};
use epc_advisor::property::{pounds, EpcRating};
use epc_advisor::tools::analyser::{
    analyse_epc, parse_certificate_text, Comparison, EpcAnalyserInputs, EpcAnalysisResults,
    EpcParseResult, ImpactLevel, ParseConfidence,
};
use epc_advisor::tools::calculator::{improvements_to_reach_target, CalculatorInputs, TargetPlan};
use epc_advisor::tools::exemption::{
    check_exemption, EligibilityLevel, ExemptionAssessment, ExemptionInputs,
};
use epc_advisor::tools::grants::{
    find_grants, grant_check_report, AreaGrantInputs, AreaGrantReport, GrantCheckReport,
    GrantCheckerInputs,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ToolArgs {
    /// JSON file shaped like the matching API request body
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the JSON response instead of the text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CostsArgs {
    #[command(flatten)]
    pub(crate) tool: ToolArgs,
    /// Also plan the cheapest route to this rating (A-G)
    #[arg(long, value_parser = parse_rating)]
    pub(crate) target: Option<EpcRating>,
}

#[derive(Args, Debug)]
pub(crate) struct ParseArgs {
    /// Plain text copied from an EPC certificate
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Run the analyser over the fields that were read
    #[arg(long)]
    pub(crate) analyse: bool,
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct SchemesArgs {
    /// Date to judge verification freshness against (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
    #[arg(long)]
    pub(crate) json: bool,
}

fn print_json<T: Serialize>(body: &T) -> Result<(), AppError> {
    let text = serde_json::to_string_pretty(body).map_err(std::io::Error::from)?;
    println!("{text}");
    Ok(())
}

fn emit<T: Serialize>(json: bool, body: &T, render: fn(&T) -> String) -> Result<(), AppError> {
    if json {
        return print_json(body);
    }
    println!("{}", render(body));
    Ok(())
}

pub(crate) fn run_grants(args: ToolArgs) -> Result<(), AppError> {
    let inputs: GrantCheckerInputs = load_json(&args.input)?;
    emit(args.json, &grant_check_report(&inputs), render_grant_report)
}

pub(crate) fn run_finder(args: ToolArgs) -> Result<(), AppError> {
    let inputs: AreaGrantInputs = load_json(&args.input)?;
    emit(args.json, &find_grants(&inputs)?, render_area_grants)
}

pub(crate) fn run_costs(args: CostsArgs) -> Result<(), AppError> {
    let inputs: CalculatorInputs = load_json(&args.tool.input)?;
    let response = cost_calculator(&inputs);
    let plan = args
        .target
        .map(|target| improvements_to_reach_target(&inputs, target));

    if args.tool.json {
        #[derive(Serialize)]
        struct WithPlan<'a> {
            #[serde(flatten)]
            response: &'a CostCalculatorResponse,
            #[serde(skip_serializing_if = "Option::is_none")]
            plan: Option<&'a TargetPlan>,
        }
        return print_json(&WithPlan {
            response: &response,
            plan: plan.as_ref(),
        });
    }

    let mut text = render_cost_report(&inputs, &response);
    if let Some(plan) = &plan {
        text.push_str("\n\n");
        text.push_str(&render_target_plan(plan));
    }
    println!("{text}");
    Ok(())
}

pub(crate) fn run_analyse(args: ToolArgs) -> Result<(), AppError> {
    let inputs: EpcAnalyserInputs = load_json(&args.input)?;
    emit(args.json, &analyse_epc(&inputs), render_analysis)
}

pub(crate) fn run_parse(args: ParseArgs) -> Result<(), AppError> {
    let parsed = parse_certificate_text(&load_text(&args.input)?);
    let analysis = args
        .analyse
        .then(|| analyse_epc(&parsed.data.clone().into_inputs()));

    if args.json {
        #[derive(Serialize)]
        struct WithAnalysis<'a> {
            #[serde(flatten)]
            parsed: &'a EpcParseResult,
            #[serde(skip_serializing_if = "Option::is_none")]
            analysis: Option<&'a EpcAnalysisResults>,
        }
        return print_json(&WithAnalysis {
            parsed: &parsed,
            analysis: analysis.as_ref(),
        });
    }

    let mut text = render_parse_result(&parsed);
    if let Some(analysis) = &analysis {
        text.push_str("\n\n");
        text.push_str(&render_analysis(analysis));
    }
    println!("{text}");
    Ok(())
}

pub(crate) fn run_exemption(args: ToolArgs) -> Result<(), AppError> {
    let inputs: ExemptionInputs = load_json(&args.input)?;
    emit(args.json, &check_exemption(&inputs), render_exemption)
}

pub(crate) fn run_schemes(args: SchemesArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    emit(args.json, &scheme_catalog(today), render_scheme_catalog)
}

pub(crate) fn render_grant_report(report: &GrantCheckReport) -> String {
    let mut lines = vec!["Grant eligibility".to_string()];
    for result in &report.results {
        lines.push(format!(
            "- {}: {}, up to {}",
            result.scheme.name,
            result.confidence.label(),
            pounds(result.max_potential_grant)
        ));
        lines.extend(result.reasons.iter().map(|reason| format!("    * {reason}")));
    }
    lines.push(format!(
        "\nTotal potential funding: {}",
        pounds(report.total_potential_funding)
    ));
    lines.push("\nNext steps".to_string());
    lines.extend(
        report
            .next_steps
            .iter()
            .enumerate()
            .map(|(index, step)| format!("{}. {step}", index + 1)),
    );
    lines.join("\n")
}

pub(crate) fn render_area_grants(report: &AreaGrantReport) -> String {
    let area = match (report.local_authority, report.region) {
        (Some(authority), _) => authority.name,
        (None, Some(region)) => region.label(),
        (None, None) => "an unrecognised area",
    };
    let mut lines = vec![format!("Funding for {area}"), report.summary.clone()];
    for found in &report.eligible {
        lines.push(format!(
            "- {}: {}, up to {}",
            found.scheme.name,
            found.confidence.label(),
            pounds(found.potential_value)
        ));
        lines.extend(found.caveats.iter().map(|caveat| format!("    ? {caveat}")));
        if let Some(share) = found.estimated_contribution {
            lines.push(format!("    landlord contribution about {}", pounds(share)));
        }
    }
    if !report.ineligible.is_empty() {
        lines.push("\nNot eligible".to_string());
        for missed in &report.ineligible {
            let reason = missed.caveats.first().map_or("", String::as_str);
            lines.push(format!("- {}: {reason}", missed.scheme.name));
        }
    }
    lines.push(format!("\n{}", report.disclaimer));
    lines.join("\n")
}

fn wire_name<T: Serialize>(value: &Option<T>) -> String {
    value
        .as_ref()
        .and_then(|value| serde_json::to_value(value).ok())
        .and_then(|value| value.as_str().map(str::to_string))
        .unwrap_or_else(|| "not found".to_string())
}

pub(crate) fn render_parse_result(result: &EpcParseResult) -> String {
    let data = &result.data;
    let confidence = match result.confidence {
        ParseConfidence::High => "high",
        ParseConfidence::Medium => "medium",
        ParseConfidence::Low => "low",
    };
    let rating = match (data.current_rating, data.current_score) {
        (Some(rating), Some(score)) => format!("{rating} ({score})"),
        (Some(rating), None) => rating.to_string(),
        _ => "not found".to_string(),
    };
    let mut lines = vec![
        format!("Certificate read with {confidence} confidence"),
        format!("Rating: {rating}"),
        format!("Construction age: {}", wire_name(&data.construction_age)),
        format!("Property type: {}", wire_name(&data.property_type)),
        format!(
            "Walls: {}, {}",
            wire_name(&data.wall_type),
            wire_name(&data.wall_insulation)
        ),
        format!("Roof: {}", wire_name(&data.roof_insulation)),
        format!("Floor: {}", wire_name(&data.floor_insulation)),
        format!("Glazing: {}", wire_name(&data.glazing_type)),
        format!(
            "Heating: {}, {}",
            wire_name(&data.heating_system),
            wire_name(&data.heating_controls)
        ),
        format!("Hot water: {}", wire_name(&data.hot_water)),
        format!("Recommendations listed: {}", data.recommendations.len()),
    ];
    if !result.warnings.is_empty() {
        lines.push("\nCheck by hand".to_string());
        lines.extend(result.warnings.iter().map(|warning| format!("- {warning}")));
    }
    lines.join("\n")
}

pub(crate) fn render_cost_report(inputs: &CalculatorInputs, response: &CostCalculatorResponse) -> String {
    let results = &response.results;
    let mut lines = vec![
        format!(
            "Upgrade costs for a {}-bedroom {} ({})",
            inputs.bedrooms.max(1),
            inputs.property_type.label(),
            inputs.region.label()
        ),
        format!(
            "Total: {} - {} (midpoint {})",
            pounds(results.total_cost_low),
            pounds(results.total_cost_high),
            pounds(results.total_cost_mid)
        ),
        format!(
            "Estimated rating after all works: {}",
            results.estimated_final_rating
        ),
    ];

    if results.cost_cap.would_reach_c {
        lines.push(format!(
            "Reaching C costs about {}",
            pounds(results.cost_cap.total_cost_to_c)
        ));
    }
    if results.cost_cap_exemption_likely {
        lines.push("Cost cap exemption likely: C is not reachable within £10,000".to_string());
    }

    lines.push("\nRecommendations".to_string());
    for rec in &results.recommendations {
        lines.push(format!(
            "{}. {}: {} - {}, +{} points ({} per point)",
            rec.priority,
            rec.name,
            pounds(rec.estimated_cost_low),
            pounds(rec.estimated_cost_high),
            rec.estimated_epc_points,
            pounds(rec.cost_per_point)
        ));
    }

    if !response.excluded.is_empty() {
        lines.push("\nNot suitable".to_string());
        for excluded in &response.excluded {
            lines.push(format!("- {}: {}", excluded.improvement.name, excluded.reason));
        }
    }

    lines.push(format!("\nGuide: {}", results.property_type_guide_url));
    lines.join("\n")
}

pub(crate) fn render_target_plan(plan: &TargetPlan) -> String {
    let mut lines = vec![format!(
        "Route to {}: {} - {}{}",
        plan.target,
        pounds(plan.total_cost.low),
        pounds(plan.total_cost.high),
        if plan.can_reach_target {
            ""
        } else {
            " (target not reachable with catalog measures)"
        }
    )];
    lines.extend(
        plan.improvements
            .iter()
            .map(|rec| format!("- {} (+{} points)", rec.name, rec.estimated_epc_points)),
    );
    lines.join("\n")
}

fn impact_label(impact: ImpactLevel) -> &'static str {
    match impact {
        ImpactLevel::High => "high",
        ImpactLevel::Medium => "medium",
        ImpactLevel::Low => "low",
    }
}

pub(crate) fn render_analysis(results: &EpcAnalysisResults) -> String {
    let comparison = &results.score_comparison;
    let verdict = match comparison.comparison {
        Comparison::Above => "above typical",
        Comparison::Below => "below typical",
        Comparison::Average => "typical",
    };
    let mut lines = vec![
        format!(
            "Score {} vs typical {} ({}): {verdict}",
            comparison.user_score, comparison.typical_score, comparison.typical_rating
        ),
        comparison.explanation.clone(),
        "\nFactors".to_string(),
    ];
    for factor in &results.factors {
        lines.push(format!(
            "- {} [{} impact]: {} (up to {} points)",
            factor.name,
            impact_label(factor.impact),
            factor.current_status,
            factor.potential_points
        ));
    }

    if results.assessor_assumptions.is_empty() {
        lines.push("\nAssessor assumptions: none spotted".to_string());
    } else {
        lines.push("\nPossible assessor assumptions".to_string());
        for assumption in &results.assessor_assumptions {
            lines.push(format!(
                "- [{}] {}: {}",
                impact_label(assumption.severity),
                assumption.title,
                assumption.check_with
            ));
        }
    }

    lines.push("\nQuick wins".to_string());
    for win in &results.quick_wins {
        lines.push(format!(
            "- {} (£{}, {})",
            win.title, win.estimated_cost, win.potential_benefit
        ));
    }

    if !results.recommendation_analysis.is_empty() {
        lines.push("\nCertificate recommendations".to_string());
        for rec in &results.recommendation_analysis {
            lines.push(format!(
                "{}. {}: {} - {}, about {} points",
                rec.priority,
                rec.name,
                pounds(rec.estimated_cost_low),
                pounds(rec.estimated_cost_high),
                rec.estimated_points
            ));
        }
    }
    lines.join("\n")
}

pub(crate) fn render_exemption(assessment: &ExemptionAssessment) -> String {
    let marker = match assessment.eligibility.level {
        EligibilityLevel::Green => "GREEN",
        EligibilityLevel::Amber => "AMBER",
        EligibilityLevel::Red => "RED",
    };
    let mut lines = vec![
        assessment.summary.clone(),
        format!(
            "{} (valid for {} years from registration)",
            assessment.name, assessment.valid_for_years
        ),
        format!("[{marker}] {}", assessment.eligibility.title),
        assessment.eligibility.description.to_string(),
        "\nEvidence".to_string(),
    ];
    for item in &assessment.evidence {
        lines.push(format!(
            "[{}] {}{}",
            if item.available { "x" } else { " " },
            item.label,
            if item.required { "" } else { " (recommended)" }
        ));
    }
    if !assessment.missing_required.is_empty() {
        lines.push(format!(
            "Missing required: {}",
            assessment.missing_required.join(", ")
        ));
    }
    lines.push("\nRegistration".to_string());
    lines.extend(
        assessment
            .registration_steps
            .iter()
            .enumerate()
            .map(|(index, step)| format!("{}. {step}", index + 1)),
    );
    lines.push(assessment.register_url.to_string());
    lines.join("\n")
}

pub(crate) fn render_scheme_catalog(catalog: &SchemeCatalogResponse) -> String {
    let mut lines = vec![format!("Grant schemes (checked {})", catalog.checked_on)];
    for scheme in catalog.schemes {
        let stale = if catalog.needing_refresh.contains(&scheme.id) {
            ", needs re-verification"
        } else {
            ""
        };
        lines.push(format!(
            "- {} ({}): up to {}, verified {}{stale}",
            scheme.name,
            scheme.administrator,
            pounds(scheme.max_grant),
            scheme.last_verified
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use epc_advisor::property::{HeatingSystem, LoftInsulation, PropertyType, WallConstruction};
    use epc_advisor::tools::exemption::{EvidenceDocument, ExemptionReason, SpendToDate};
    use epc_advisor::tools::grants::{Answer, TenantIncome, Tenure};

    #[test]
    fn grant_report_lists_every_scheme() {
        let inputs = GrantCheckerInputs {
            current_epc_rating: Some(EpcRating::E),
            tenant_on_benefits: Answer::Yes,
            ..GrantCheckerInputs::default()
        };
        let text = render_grant_report(&grant_check_report(&inputs));
        assert!(text.starts_with("Grant eligibility"));
        assert_eq!(text.matches("\n- ").count(), 4);
        assert!(text.contains("Next steps\n1. "));
    }

    #[test]
    fn area_report_names_the_council_and_contribution() {
        let inputs = AreaGrantInputs {
            postcode: "M14 5TP".to_string(),
            property_type: PropertyType::VictorianTerrace,
            current_epc_rating: Some(EpcRating::D),
            tenure: Tenure::Freehold,
            heating_system: HeatingSystem::GasBoiler,
            tenant_benefit_status: Answer::Yes,
            tenant_income_status: TenantIncome::Below36k,
        };
        let text = render_area_grants(&find_grants(&inputs).expect("valid inputs"));
        assert!(text.starts_with("Funding for Manchester"));
        assert!(text.contains("landlord contribution about £"));
        assert!(text.contains("\nNot eligible\n"));
        assert!(text.ends_with("Last updated: January 2026."));
    }

    #[test]
    fn parse_report_lists_fields_and_gaps() {
        let parsed = parse_certificate_text(
            "Current energy efficiency rating F (30). Windows: Single glazed.",
        );
        let text = render_parse_result(&parsed);
        assert!(text.contains("Rating: F (30)"));
        assert!(text.contains("Glazing: single"));
        assert!(text.contains("Construction age: not found"));
        assert!(text.contains("\nCheck by hand\n- "));
    }

    #[test]
    fn cost_report_names_property_and_exclusions() {
        let inputs = CalculatorInputs {
            current_rating: Some(EpcRating::E),
            property_type: PropertyType::Semi1930s,
            bedrooms: 3,
            wall_construction: WallConstruction::Cavity,
            loft_insulation: LoftInsulation::Under100mm,
            ..CalculatorInputs::default()
        };
        let text = render_cost_report(&inputs, &cost_calculator(&inputs));
        assert!(text.starts_with("Upgrade costs for a 3-bedroom 1930s semi"));
        assert!(text.contains("Loft Insulation Top-Up: £440 - £660"));
        assert!(text.contains("Not suitable"));
    }

    #[test]
    fn exemption_report_marks_held_documents() {
        let inputs = ExemptionInputs {
            spend_to_date: SpendToDate::Over10000,
            exemption_reason: ExemptionReason::CostCap,
            evidence_available: vec![EvidenceDocument::CurrentEpc],
            ..ExemptionInputs::default()
        };
        let text = render_exemption(&check_exemption(&inputs));
        assert!(text.contains("[x] Current EPC certificate"));
        assert!(text.contains("[ ] Minimum 3 quotes from installers"));
        assert!(text.contains("Missing required: Minimum 3 quotes from installers"));
    }
}
