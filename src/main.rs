use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use endless_onboarding::config::ApiConfig;
use endless_onboarding::navigation::{Navigator, TracingNavigator};
use endless_onboarding::onboarding::list_builder::ListBuilder;
use endless_onboarding::onboarding::model::{
    BusinessType, GrowthStage, INDUSTRIES, TargetMarket, US_STATES,
};
use endless_onboarding::onboarding::validate;
use endless_onboarding::onboarding::{
    MountOutcome, OnboardingController, StepAdvance, WizardStep,
};
use endless_onboarding::session::SessionContext;
use endless_onboarding::store::{CompanyStore, HttpCompanyStore};

type InputLines = Lines<BufReader<Stdin>>;

/// Outcome of one screen interaction.
enum Flow {
    /// Render whatever step the controller is on next.
    Continue,
    /// Leave the wizard early (quit or stdin closed).
    Quit,
    /// Onboarding finished.
    Done,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = ApiConfig::from_env()?;

    eprintln!("🏢 Endless onboarding v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   API: {}", config.base_url);
    eprintln!();

    let store: Arc<dyn CompanyStore> = Arc::new(HttpCompanyStore::new(config)?);
    let session = Arc::new(SessionContext::new(Arc::clone(&store)));
    let navigator: Arc<dyn Navigator> = Arc::new(TracingNavigator);

    let (mut controller, outcome) =
        OnboardingController::mount(store, session, navigator).await;

    match outcome {
        MountOutcome::AlreadyCompleted => {
            println!("Onboarding is already completed — nothing to do.");
            return Ok(());
        }
        MountOutcome::Resumed(step) => {
            eprintln!("   Resuming at step {} of 4: {}", step.index(), step.title());
        }
        MountOutcome::LoadFailed => {
            eprintln!("   Warning: could not load your company profile; starting fresh.");
            eprintln!("   If you already onboarded, quit and check the backend connection.");
        }
        MountOutcome::NewUser => {}
    }

    run_wizard(&mut controller).await
}

async fn run_wizard(controller: &mut OnboardingController) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let flow = match controller.step() {
            WizardStep::Landing => landing_screen(&mut lines, controller).await?,
            WizardStep::Basics => basics_screen(&mut lines, controller).await?,
            WizardStep::BusinessProfile => business_screen(&mut lines, controller).await?,
            WizardStep::MarketContext => market_screen(&mut lines, controller).await?,
            WizardStep::Summary => summary_screen(&mut lines, controller).await?,
        };
        match flow {
            Flow::Continue => {}
            Flow::Quit => {
                eprintln!("Bye — saved progress resumes on the next run.");
                break;
            }
            Flow::Done => break,
        }
    }
    Ok(())
}

async fn landing_screen(
    lines: &mut InputLines,
    controller: &mut OnboardingController,
) -> anyhow::Result<Flow> {
    println!("\n== Welcome to Endless ==");
    println!("Set up your company profile in four quick steps.");
    let Some(input) = read_line(lines, "Press Enter to get started ('q' to quit): ").await?
    else {
        return Ok(Flow::Quit);
    };
    if input.eq_ignore_ascii_case("q") {
        return Ok(Flow::Quit);
    }
    controller.start();
    Ok(Flow::Continue)
}

async fn basics_screen(
    lines: &mut InputLines,
    controller: &mut OnboardingController,
) -> anyhow::Result<Flow> {
    print_header(controller);

    let Some(name) = text_field(lines, "Company name", &controller.profile().name).await? else {
        return Ok(Flow::Quit);
    };
    controller.profile_mut().name = name;

    match pick(lines, "Industry", &INDUSTRIES).await? {
        Pick::Chosen(i) => controller.profile_mut().industry = INDUSTRIES[i].to_string(),
        Pick::Skipped => {}
        Pick::Eof => return Ok(Flow::Quit),
    }

    let Some(city) = text_field(lines, "City", &controller.profile().location_city).await? else {
        return Ok(Flow::Quit);
    };
    controller.profile_mut().location_city = city;

    let Some(state) = state_field(lines, &controller.profile().location_state.clone()).await?
    else {
        return Ok(Flow::Quit);
    };
    controller.profile_mut().location_state = state;

    let current_site = controller.profile().website.clone().unwrap_or_default();
    let Some(site) = text_field(lines, "Website (optional)", &current_site).await? else {
        return Ok(Flow::Quit);
    };
    controller.profile_mut().website = if site.is_empty() { None } else { Some(site) };

    nav_prompt(lines, controller).await
}

async fn business_screen(
    lines: &mut InputLines,
    controller: &mut OnboardingController,
) -> anyhow::Result<Flow> {
    print_header(controller);

    let type_labels: Vec<&str> = BusinessType::ALL.iter().map(|t| t.label()).collect();
    match pick(lines, "Business type", &type_labels).await? {
        Pick::Chosen(i) => controller.profile_mut().business_type = Some(BusinessType::ALL[i]),
        Pick::Skipped => {}
        Pick::Eof => return Ok(Flow::Quit),
    }

    let Some(year) = year_field(lines, controller.profile().founded_year).await? else {
        return Ok(Flow::Quit);
    };
    controller.profile_mut().founded_year = year;

    let Some(count) = count_field(lines, controller.profile().employee_count).await? else {
        return Ok(Flow::Quit);
    };
    controller.profile_mut().employee_count = count;

    let Some(revenue) = revenue_field(lines, controller.profile().annual_revenue).await? else {
        return Ok(Flow::Quit);
    };
    controller.profile_mut().annual_revenue = revenue;

    let stage_labels: Vec<&str> = GrowthStage::ALL.iter().map(|s| s.label()).collect();
    match pick(lines, "Growth stage", &stage_labels).await? {
        Pick::Chosen(i) => controller.profile_mut().growth_stage = Some(GrowthStage::ALL[i]),
        Pick::Skipped => {}
        Pick::Eof => return Ok(Flow::Quit),
    }

    nav_prompt(lines, controller).await
}

async fn market_screen(
    lines: &mut InputLines,
    controller: &mut OnboardingController,
) -> anyhow::Result<Flow> {
    print_header(controller);

    let market_labels: Vec<&str> = TargetMarket::ALL.iter().map(|m| m.label()).collect();
    match pick(lines, "Target market", &market_labels).await? {
        Pick::Chosen(i) => controller.profile_mut().target_market = TargetMarket::ALL[i],
        Pick::Skipped => {}
        Pick::Eof => return Ok(Flow::Quit),
    }

    if let Flow::Quit =
        list_editor(lines, "Primary products/services", controller.products_mut()).await?
    {
        return Ok(Flow::Quit);
    }
    if let Flow::Quit =
        list_editor(lines, "Competitors", controller.competitors_mut()).await?
    {
        return Ok(Flow::Quit);
    }

    nav_prompt(lines, controller).await
}

async fn summary_screen(
    lines: &mut InputLines,
    controller: &mut OnboardingController,
) -> anyhow::Result<Flow> {
    print_header(controller);

    let profile = controller.profile_snapshot();
    println!("  Company:     {}", profile.name);
    println!("  Industry:    {}", profile.industry);
    println!(
        "  Location:    {}, {} ({})",
        profile.location_city, profile.location_state, profile.location_country
    );
    if let Some(website) = &profile.website {
        println!("  Website:     {website}");
    }
    if let Some(business_type) = profile.business_type {
        println!("  Type:        {}", business_type.label());
    }
    println!("  Founded:     {}", profile.founded_year);
    println!("  Employees:   {}", profile.employee_count);
    println!("  Revenue:     ${}", profile.annual_revenue);
    if let Some(stage) = profile.growth_stage {
        println!("  Stage:       {}", stage.label());
    }
    println!("  Market:      {}", profile.target_market.label());
    if !profile.primary_products.is_empty() {
        println!("  Products:    {}", profile.primary_products.join(", "));
    }
    if !profile.competitors.is_empty() {
        println!("  Competitors: {}", profile.competitors.join(", "));
    }

    loop {
        if let Some(message) = controller.last_error() {
            println!("⚠️  {message}");
        }
        let Some(input) = read_line(lines, "[f]inish  [b]ack  [q]uit: ").await? else {
            return Ok(Flow::Quit);
        };
        match input.as_str() {
            "f" => {
                if controller.complete().await {
                    println!("\n🎉 You're all set — welcome to Endless!");
                    return Ok(Flow::Done);
                }
                // Error is shown at the top of the loop; retry is manual.
            }
            "b" => {
                controller.back();
                return Ok(Flow::Continue);
            }
            "q" => return Ok(Flow::Quit),
            _ => {}
        }
    }
}

/// Shared continue/back prompt for the three form screens.
async fn nav_prompt(
    lines: &mut InputLines,
    controller: &mut OnboardingController,
) -> anyhow::Result<Flow> {
    loop {
        if let Some(message) = controller.last_error() {
            println!("⚠️  {message}");
        }
        let gate_open = controller.can_proceed();
        if !gate_open {
            println!("Please fill all required fields — Continue is disabled.");
        }
        let Some(input) = read_line(lines, "[c]ontinue  [b]ack  [e]dit  [q]uit: ").await? else {
            return Ok(Flow::Quit);
        };
        match input.as_str() {
            "c" => match controller.advance().await {
                StepAdvance::Advanced(_) => return Ok(Flow::Continue),
                StepAdvance::Failed => {
                    // Message shown at the top of the loop; retry is manual.
                }
                StepAdvance::Blocked => {}
            },
            "b" => {
                controller.back();
                return Ok(Flow::Continue);
            }
            "e" => return Ok(Flow::Continue),
            "q" => return Ok(Flow::Quit),
            _ => {}
        }
    }
}

fn print_header(controller: &OnboardingController) {
    let step = controller.step();
    println!("\n── Step {} of 4: {} ──", step.index(), step.title());
}

/// Read one trimmed line from stdin. `None` when stdin closes.
async fn read_line(lines: &mut InputLines, label: &str) -> anyhow::Result<Option<String>> {
    eprint!("{label}");
    Ok(lines.next_line().await?.map(|l| l.trim().to_string()))
}

/// Free-text field; empty input keeps the current value.
async fn text_field(
    lines: &mut InputLines,
    label: &str,
    current: &str,
) -> anyhow::Result<Option<String>> {
    let shown = if current.is_empty() {
        String::new()
    } else {
        format!(" [{current}]")
    };
    let Some(raw) = read_line(lines, &format!("{label}{shown}: ")).await? else {
        return Ok(None);
    };
    Ok(Some(if raw.is_empty() {
        current.to_string()
    } else {
        raw
    }))
}

/// Two-letter state code field; re-prompts until a known code or empty-keep.
async fn state_field(lines: &mut InputLines, current: &str) -> anyhow::Result<Option<String>> {
    loop {
        let shown = if current.is_empty() {
            String::new()
        } else {
            format!(" [{current}]")
        };
        let Some(raw) = read_line(lines, &format!("State (2-letter code){shown}: ")).await? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(Some(current.to_string()));
        }
        let code = raw.to_ascii_uppercase();
        if US_STATES.contains(&code.as_str()) {
            return Ok(Some(code));
        }
        println!("Unknown state code {raw:?} — use a two-letter code like TX.");
    }
}

async fn year_field(lines: &mut InputLines, current: i32) -> anyhow::Result<Option<i32>> {
    loop {
        let Some(raw) = read_line(lines, &format!("Founded year [{current}]: ")).await? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(Some(current));
        }
        match raw.parse::<i32>() {
            Ok(year) if validate::founded_year_in_range(year) => return Ok(Some(year)),
            _ => println!("Enter a year between 1900 and the current year."),
        }
    }
}

async fn count_field(lines: &mut InputLines, current: u32) -> anyhow::Result<Option<u32>> {
    loop {
        let Some(raw) = read_line(lines, &format!("Number of employees [{current}]: ")).await?
        else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(Some(current));
        }
        match raw.parse::<u32>() {
            Ok(count) if validate::employee_count_in_range(count) => return Ok(Some(count)),
            _ => println!("Enter a whole number of at least 1."),
        }
    }
}

async fn revenue_field(
    lines: &mut InputLines,
    current: Decimal,
) -> anyhow::Result<Option<Decimal>> {
    loop {
        let Some(raw) = read_line(lines, &format!("Annual revenue (USD) [{current}]: ")).await?
        else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(Some(current));
        }
        match raw.parse::<Decimal>() {
            Ok(revenue) if validate::annual_revenue_in_range(revenue) => {
                return Ok(Some(revenue));
            }
            _ => println!("Enter a non-negative amount, e.g. 250000."),
        }
    }
}

/// Result of a numbered-list pick.
enum Pick {
    Chosen(usize),
    Skipped,
    Eof,
}

/// Numbered picker; empty input keeps the current selection.
async fn pick(lines: &mut InputLines, label: &str, options: &[&str]) -> anyhow::Result<Pick> {
    println!("{label}:");
    for (i, option) in options.iter().enumerate() {
        println!("  {}. {}", i + 1, option);
    }
    loop {
        let Some(raw) = read_line(lines, "Choose a number (Enter to keep current): ").await?
        else {
            return Ok(Pick::Eof);
        };
        if raw.is_empty() {
            return Ok(Pick::Skipped);
        }
        match raw.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => return Ok(Pick::Chosen(n - 1)),
            _ => println!("Enter a number between 1 and {}.", options.len()),
        }
    }
}

/// Interactive add/remove editor for a list field.
async fn list_editor(
    lines: &mut InputLines,
    label: &str,
    list: &mut ListBuilder,
) -> anyhow::Result<Flow> {
    loop {
        if list.is_empty() {
            println!("{label}: (none)");
        } else {
            println!("{label}:");
            for (i, item) in list.items().iter().enumerate() {
                println!("  {}. {}", i + 1, item);
            }
        }
        let Some(input) =
            read_line(lines, "Type to add, 'rm <n>' to remove, Enter when done: ").await?
        else {
            return Ok(Flow::Quit);
        };
        if input.is_empty() {
            return Ok(Flow::Continue);
        }
        if let Some(raw) = input.strip_prefix("rm ") {
            match raw.trim().parse::<usize>() {
                Ok(n) if n >= 1 => {
                    if list.remove_at(n - 1).is_none() {
                        println!("No entry {n}.");
                    }
                }
                _ => println!("Usage: rm <number>"),
            }
            continue;
        }
        list.set_input(input);
        list.add();
    }
}
