use clap::{Args, Parser, Subcommand, ValueEnum};
use roster::model::Role;
use roster::view::{PassportFilter, RoleFilter, ViewFilter};

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version)]
#[command(about = "Keep a team roster and copy email lists from it", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a person
    #[command(alias = "n")]
    Add {
        /// Full name (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        #[arg(short, long, value_enum, default_value_t = RoleArg::Student)]
        role: RoleArg,

        /// School or personal email
        #[arg(short, long)]
        email: Option<String>,

        /// Parent/guardian email (students only)
        #[arg(short, long)]
        guardian: Option<String>,

        /// Has a passport
        #[arg(long)]
        passport: bool,
    },

    /// Edit a person; unspecified fields keep their current value
    #[command(alias = "e")]
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(short, long, value_enum)]
        role: Option<RoleArg>,

        /// New email ("" clears it)
        #[arg(short, long)]
        email: Option<String>,

        /// New guardian email ("" clears it)
        #[arg(short, long)]
        guardian: Option<String>,

        #[arg(long, value_enum)]
        passport: Option<YesNo>,
    },

    /// Remove one or more people
    #[command(alias = "rm")]
    Remove {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Show one person
    #[command(alias = "v")]
    Show { id: String },

    /// List people
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Copy an email list to the clipboard
    #[command(alias = "cp")]
    Copy {
        #[command(subcommand)]
        target: CopyTarget,

        /// Print the list instead of using the clipboard
        #[arg(long, global = true)]
        print: bool,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (confirm-remove, use-clipboard)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CopyTarget {
    /// Everyone's email
    All,
    /// Students' emails
    #[command(alias = "student")]
    Students,
    /// Chaperones' emails
    #[command(alias = "chaperone")]
    Chaperones,
    /// Emails of selected people
    Selected {
        /// Ids to select (toggled on top of --visible)
        ids: Vec<String>,

        /// Start from every row visible under the filter flags
        #[arg(long)]
        visible: bool,

        #[command(flatten)]
        filter: FilterArgs,

        /// Also copy students' guardian emails
        #[arg(long)]
        guardians: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Role filter
    #[arg(short, long, value_enum, default_value_t = RoleFilterArg::All)]
    pub role: RoleFilterArg,

    /// Passport filter
    #[arg(short, long, value_enum, default_value_t = YesNoAll::All)]
    pub passport: YesNoAll,

    /// Search names and emails
    #[arg(short, long)]
    pub search: Option<String>,
}

impl FilterArgs {
    pub fn view_filter(&self) -> ViewFilter {
        ViewFilter::new(self.role.into(), self.passport.into())
    }

    pub fn query(&self) -> &str {
        self.search.as_deref().unwrap_or("")
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    Student,
    Chaperone,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Student => Role::Student,
            RoleArg::Chaperone => Role::Chaperone,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum RoleFilterArg {
    #[default]
    All,
    #[value(alias = "student")]
    Students,
    #[value(alias = "chaperones")]
    Chaperone,
}

impl From<RoleFilterArg> for RoleFilter {
    fn from(arg: RoleFilterArg) -> Self {
        match arg {
            RoleFilterArg::All => RoleFilter::All,
            RoleFilterArg::Students => RoleFilter::Students,
            RoleFilterArg::Chaperone => RoleFilter::Chaperone,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum YesNo {
    Yes,
    No,
}

impl From<YesNo> for bool {
    fn from(arg: YesNo) -> Self {
        arg == YesNo::Yes
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum YesNoAll {
    #[default]
    All,
    Yes,
    No,
}

impl From<YesNoAll> for PassportFilter {
    fn from(arg: YesNoAll) -> Self {
        match arg {
            YesNoAll::All => PassportFilter::All,
            YesNoAll::Yes => PassportFilter::Yes,
            YesNoAll::No => PassportFilter::No,
        }
    }
}
