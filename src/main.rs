//! Command-line front end for the wizard link helpers.
//!
//! # Usage
//!
//! ```bash
//! # Link to the guided wizard with a common template
//! wizard-links create --kind basic --namespace ns1 --template fedora --common
//!
//! # Decode the initial data of a link
//! wizard-links parse '/k8s/ns/ns1/virtualmachines/~new?initData=%7B%22name%22%3A%22vm1%22%7D'
//!
//! # Shorten a URL for display
//! wizard-links elide https://a.b.c.example.com/images/fedora/35/disk.qcow2 --hostname-parts 2
//!
//! # Check where deleting a resource would navigate
//! wizard-links redirect --name vm1 --namespace foo --current-path /k8s/ns/foo/virtualmachines/vm1/details
//! ```
//!
//! # Environment Variables
//!
//! See [`vm_wizard_links::config`].

use vm_wizard_links::application::redirect::redirect_if_viewing_deleted;
use vm_wizard_links::application::wizard_link::{
    WizardLinkRequest, build_wizard_link, parse_wizard_initial_data,
};
use vm_wizard_links::config::{Config, load_from_env};
use vm_wizard_links::domain::entities::{BootSourceParams, ResourceRef, Template, VmTemplate};
use vm_wizard_links::domain::navigator::MemoryHistory;
use vm_wizard_links::domain::wizard::{ListTab, WizardKind, WizardMode, WizardView};
use vm_wizard_links::routes::ConsoleRoutes;
use vm_wizard_links::utils::location::{console_api_base, is_connection_encrypted, parse_url};
use vm_wizard_links::utils::url_elision::UrlShorteningRequest;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use tracing_subscriber::EnvFilter;

/// Build and inspect links into the virtual machine pages.
#[derive(Parser)]
#[command(name = "wizard-links")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a link into a creation wizard
    Create(CreateArgs),

    /// Decode the wizard initial data of a link or query string
    Parse {
        /// Full URL, path with query, or bare query string
        input: String,
    },

    /// Shorten a URL for display
    Elide {
        url: String,

        /// Hostname labels to keep, 1-16 (default from MAX_HOSTNAME_PARTS)
        #[arg(long)]
        hostname_parts: Option<usize>,

        /// Path segments to keep, 1-64 (default from MAX_PATHNAME_PARTS)
        #[arg(long)]
        pathname_parts: Option<usize>,
    },

    /// Show where deleting a resource would navigate
    Redirect {
        /// Name of the deleted resource
        #[arg(long)]
        name: String,

        /// Namespace of the deleted resource
        #[arg(long)]
        namespace: Option<String>,

        /// Pathname of the page currently shown
        #[arg(long)]
        current_path: String,

        /// List sub-tab to land on ("" or "templates")
        #[arg(long)]
        tab: Option<ListTab>,
    },

    /// Show console API base and connection security for a page URL
    Location {
        page_url: String,
    },
}

#[derive(Args)]
struct CreateArgs {
    /// Wizard flow: basic, wizard or yaml
    #[arg(short, long, default_value = "wizard")]
    kind: WizardKind,

    #[arg(short, long)]
    namespace: Option<String>,

    /// vm, template or import
    #[arg(long)]
    mode: Option<WizardMode>,

    /// simple or advanced
    #[arg(long)]
    view: Option<WizardView>,

    /// Template name
    #[arg(short, long)]
    template: Option<String>,

    /// Template namespace (defaults to "openshift")
    #[arg(long, default_value = "openshift")]
    template_namespace: String,

    /// Treat the template as platform-provided
    #[arg(long)]
    common: bool,

    /// Workload profile of the template (e.g. "server", "saphana")
    #[arg(long)]
    workload_profile: Option<String>,

    /// Name of the new virtual machine
    #[arg(long)]
    name: Option<String>,

    /// Start the virtual machine after creation
    #[arg(long)]
    start: bool,

    #[command(flatten)]
    boot: BootArgs,

    #[arg(long)]
    storage_class: Option<String>,

    #[arg(long)]
    access_mode: Option<String>,

    #[arg(long)]
    volume_mode: Option<String>,
}

#[derive(Args)]
struct BootArgs {
    /// Boot disk image URL
    #[arg(long)]
    boot_url: Option<String>,

    /// Boot container disk image
    #[arg(long)]
    boot_container: Option<String>,

    /// Persistent volume claim to clone
    #[arg(long)]
    boot_pvc: Option<String>,

    /// Namespace of the persistent volume claim
    #[arg(long)]
    boot_pvc_namespace: Option<String>,
}

impl BootArgs {
    fn into_params(self) -> Option<BootSourceParams> {
        let params = BootSourceParams {
            url: self.boot_url,
            container: self.boot_container,
            pvc_name: self.boot_pvc,
            pvc_namespace: self.boot_pvc_namespace,
        };

        (!params.is_empty()).then_some(params)
    }
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();

    let config = load_from_env().context("Invalid configuration")?;
    init_tracing(&config);
    config.print_summary();

    match cli.command {
        Commands::Create(args) => handle_create(args),
        Commands::Parse { input } => handle_parse(&input)?,
        Commands::Elide {
            url,
            hostname_parts,
            pathname_parts,
        } => {
            let config = config
                .with_elision_budgets(hostname_parts, pathname_parts)
                .context("Invalid elision budget")?;
            handle_elide(&url, config.max_hostname_parts, config.max_pathname_parts)?
        }
        Commands::Redirect {
            name,
            namespace,
            current_path,
            tab,
        } => handle_redirect(name, namespace, current_path, tab),
        Commands::Location { page_url } => handle_location(&config, &page_url)?,
    }

    Ok(())
}

fn handle_create(args: CreateArgs) {
    let template = args.template.map(|name| {
        let mut template = Template::new(name, args.template_namespace);
        if args.common {
            template = template.common();
        }
        if let Some(profile) = &args.workload_profile {
            template = template.with_workload(profile);
        }
        template
    });

    let mut request = WizardLinkRequest::new(args.kind).with_start_vm(args.start);
    request.namespace = args.namespace;
    request.mode = args.mode;
    request.view = args.view;
    request.template = template.as_ref().map(|t| t as &dyn VmTemplate);
    request.name = args.name;
    request.boot_source = args.boot.into_params();
    request.storage_class = args.storage_class;
    request.access_mode = args.access_mode;
    request.volume_mode = args.volume_mode;

    println!("{}", build_wizard_link(&request, &ConsoleRoutes));
}

fn handle_parse(input: &str) -> Result<()> {
    let query = match parse_url(input) {
        Some(url) => url.query().unwrap_or_default().to_string(),
        None => input
            .split_once('?')
            .map(|(_, query)| query)
            .unwrap_or(input)
            .to_string(),
    };

    let data = parse_wizard_initial_data(&query);
    if data.is_empty() {
        println!("{}", "No wizard initial data".yellow());
        return Ok(());
    }

    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}

fn handle_elide(input: &str, max_hostname_parts: usize, max_pathname_parts: usize) -> Result<()> {
    let url = parse_url(input).with_context(|| format!("Not a valid URL: {input}"))?;
    let request = UrlShorteningRequest::new(&url, max_hostname_parts, max_pathname_parts);

    println!("{}", request.resolve());
    Ok(())
}

fn handle_redirect(
    name: String,
    namespace: Option<String>,
    current_path: String,
    tab: Option<ListTab>,
) {
    let entity = ResourceRef { name, namespace };
    let history = MemoryHistory::at(current_path);

    if redirect_if_viewing_deleted(&entity, tab, &history, &ConsoleRoutes) {
        for path in history.pushed() {
            println!("{} {}", "Redirect to".green().bold(), path);
        }
    } else {
        println!("{}", "Not viewing the deleted resource, no redirect".dimmed());
    }
}

fn handle_location(config: &Config, page_url: &str) -> Result<()> {
    let url = parse_url(page_url).with_context(|| format!("Not a valid URL: {page_url}"))?;

    println!("API base:  {}", console_api_base(&config.console_base_path));
    let security = if is_connection_encrypted(&url) {
        "encrypted".green()
    } else {
        "not encrypted".red()
    };
    println!("Connection: {security}");

    Ok(())
}
