//! Agent command implementation.

use crate::error::Result;
use crate::output::Formatter;
use trustlens_agent::Agent;

/// Execute the agent command.
pub fn execute_agent(agent: &Agent, formatter: &Formatter) -> Result<()> {
    let config = agent.descriptor().get_config();
    println!("{}", formatter.format_agent_config(&config)?);
    Ok(())
}
