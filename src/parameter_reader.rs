use std::collections::HashMap;
use std::fs;
use std::str::FromStr;

use crate::error::{PercolationError, Result};

/// Reads `name: value` parameter files. Blank lines and lines starting with
/// `#` are skipped, unknown names are ignored.
pub struct ParameterReader
{
    content: String,
    names: Vec<&'static str>,
}

impl ParameterReader
{
    /// The parameter file is the first command-line argument.
    pub fn build(args: &[String], names: &[&'static str]) -> Result<Self>
    {
        if args.len() < 2
        {
            return Err(PercolationError::NotEnoughArguments);
        }
        let content = fs::read_to_string(&args[1])?;
        Ok(Self::from_content(content, names))
    }
    pub fn from_content(content: String, names: &[&'static str]) -> Self
    {
        Self { content, names: names.to_vec() }
    }
    fn entries<'a>(&'a self, delimiter: &'a str) -> impl Iterator<Item = Result<(&'a str, &'a str)>> + 'a
    {
        self.content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(move |line|
            {
                let Some((name, value)) = line.split_once(delimiter) else
                {
                    return Err(PercolationError::BadDelimiter(line.to_owned()));
                };
                Ok((name.trim(), value.trim()))
            })
    }
    /// Every required name must be present.
    pub fn parse_parameters(&self, delimiter: &str) -> Result<HashMap<&'static str, String>>
    {
        let mut parameter_map: HashMap<&'static str, String> = HashMap::new();
        for entry in self.entries(delimiter)
        {
            let (name, value) = entry?;
            if let Some(&known) = self.names.iter().find(|&&known| known == name)
            {
                parameter_map.insert(known, value.to_owned());
            }
        }
        for name in &self.names
        {
            if !parameter_map.contains_key(name)
            {
                return Err(PercolationError::MissingParameter(name.to_string()));
            }
        }
        Ok(parameter_map)
    }
    pub fn get_optional(&self, name: &str, delimiter: &str) -> Result<Option<String>>
    {
        for entry in self.entries(delimiter)
        {
            let (key, value) = entry?;
            if key == name
            {
                return Ok(Some(value.to_owned()));
            }
        }
        Ok(None)
    }
}

pub fn parse_value<T: FromStr>(name: &str, value: &str) -> Result<T>
{
    value.trim().parse().map_err(|_| PercolationError::InvalidParameter { name: name.to_owned(), value: value.to_owned() })
}
