use anyhow::Context;
use clap::Parser;
use laundry_booking::config::{BookArgs, Command, LogFormat};
use laundry_booking::core::{ConfigProvider, SubmissionPolicy};
use laundry_booking::domain::model::{BookingQuery, RegisterRequest, Service};
use laundry_booking::utils::error::ErrorSeverity;
use laundry_booking::utils::{logger, validation::Validate};
use laundry_booking::{ApiClient, BookingFlow, CatalogOrigin, CliConfig, Result, Session};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    let config = cli
        .client_config()
        .context("failed to load configuration")?;
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }
    tracing::debug!("Using API at {}", config.api_base_url());

    let client = ApiClient::new(&config, Session::new()).context("failed to build HTTP client")?;

    if let Err(e) = run(&cli.command, &client, config.submission_policy()).await {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low | ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run(command: &Command, client: &ApiClient, policy: SubmissionPolicy) -> Result<()> {
    match command {
        Command::Services { category } => {
            let services = match category {
                Some(category) => client.services_by_category(category).await?,
                None => client.list_services().await?,
            };
            print_services(&services);
        }
        Command::Book(args) => book(args, client, policy).await?,
        Command::Health => {
            let status = client.health().await?;
            println!("✅ API is up: {}", status);
        }
        Command::Login { email, password } => {
            let auth = client.login(email, password).await?;
            println!("✅ Logged in");
            println!("token: {}", auth.token);
        }
        Command::Register {
            name,
            email,
            password,
            phone,
            address,
        } => {
            let request = RegisterRequest {
                name: name.clone(),
                email: email.clone(),
                password: password.clone(),
                phone: phone.clone(),
                address: address.clone(),
            };
            let auth = client.register(&request).await?;
            println!("✅ Registered {}", email);
            println!("token: {}", auth.token);
        }
        Command::Profile => {
            let user = client.profile().await?;
            println!("{}", serde_json::to_string_pretty(&user)?);
        }
        Command::Bookings {
            page,
            limit,
            status,
        } => {
            let query = BookingQuery {
                page: *page,
                limit: *limit,
                status: status.clone(),
            };
            let bookings = client.list_bookings(&query).await?;
            println!("{}", serde_json::to_string_pretty(&bookings)?);
        }
        Command::Booking { id } => {
            let booking = client.get_booking(id).await?;
            println!("{}", serde_json::to_string_pretty(&booking)?);
        }
    }
    Ok(())
}

fn print_services(services: &[Service]) {
    if services.is_empty() {
        println!("No services available");
        return;
    }
    for service in services {
        println!(
            "{:>4}  {:<24} {:>8.2} {}  ~{}h",
            service.id, service.name, service.price, service.currency, service.estimated_time
        );
        if !service.description.is_empty() {
            println!("      {}", service.description);
        }
    }
}

/// Runs the whole wizard from the command line: select, fill in, submit.
async fn book(args: &BookArgs, client: &ApiClient, policy: SubmissionPolicy) -> Result<()> {
    let mut flow = BookingFlow::new(client.clone(), client.clone()).with_policy(policy);

    if flow.start().await == CatalogOrigin::Fallback {
        println!("⚠️  Service list unavailable, showing our standard services");
    }

    for item in &args.services {
        if !flow.selection().contains(&item.id) && !flow.toggle_service(&item.id) {
            eprintln!("⚠️  Unknown service '{}', skipping", item.id);
            continue;
        }
        if item.quantity != 1 && !flow.update_quantity(&item.id, item.quantity) {
            eprintln!(
                "⚠️  Quantity {} for service '{}' ignored, it must be at least 1",
                item.quantity, item.id
            );
        }
    }

    flow.continue_to_booking()?;

    let draft = flow.draft_mut();
    draft.customer_name = args.name.clone().unwrap_or_default();
    draft.customer_phone = args.phone.clone().unwrap_or_default();
    draft.address = args.address.clone().unwrap_or_default();
    draft.building_number = args.building.clone();
    draft.floor_flat = args.floor_flat.clone();
    draft.landmark = args.landmark.clone();
    draft.pickup_date = args.date.clone().unwrap_or_default();
    draft.pickup_time = args.time.clone().unwrap_or_default();
    draft.special_instructions = args.instructions.clone();

    let currency = flow.currency().unwrap_or_default().to_string();
    println!("🧺 Your order:");
    for (id, quantity) in flow.selection().quantities() {
        if let Some(service) = flow.service(id) {
            println!(
                "   {} x {:<24} {:>8.2} {}",
                quantity,
                service.name,
                service.price * f64::from(*quantity),
                service.currency
            );
        }
    }
    println!("   Total: {:.2} {}", flow.total(), currency);

    let receipt = flow.submit().await?;
    println!("✅ Booking confirmed!");
    println!(
        "   Pickup {} at {} from {}",
        receipt.payload.pickup_date, receipt.payload.pickup_time, receipt.payload.pickup_address
    );
    println!("   We will call {} to confirm.", receipt.payload.customer_phone);

    Ok(())
}
