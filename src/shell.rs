//! Text menu around an [`AvlTree`] of names
//!
//! The shell is generic over its input and output so it can be driven by stdin/stdout or by
//! in-memory buffers.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::error::Result;
use crate::tree::AvlTree;

/// An option of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Add,
    Remove,
    Show,
    Quit,
}

impl Choice {
    /// Parses a menu option, ignoring surrounding whitespace
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            "1" => Some(Choice::Add),
            "2" => Some(Choice::Remove),
            "3" => Some(Choice::Show),
            "4" => Some(Choice::Quit),
            _ => None,
        }
    }
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    tree: AvlTree<String>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            tree: AvlTree::new(),
        }
    }

    pub fn tree(&self) -> &AvlTree<String> {
        &self.tree
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Inserts every key in order. Unless `quiet` is set, the tree is printed before and after
    /// each insertion.
    pub fn seed<I>(&mut self, keys: I, quiet: bool) -> Result<()>
        where I: IntoIterator<Item = String>,
    {
        info!("seeding tree");
        for key in keys {
            if quiet {
                self.tree.insert(key);
            } else {
                self.add(key)?;
            }
        }
        info!(len = self.tree.len(), height = self.tree.height(), "seeded tree");

        Ok(())
    }

    /// Inserts `key`, printing the tree before and after
    pub fn add(&mut self, key: String) -> Result<()> {
        writeln!(self.output, "Inserindo {} na árvore AVL:", key)?;
        write!(self.output, "{}", self.tree.render())?;
        writeln!(self.output)?;

        writeln!(self.output, "Árvore após inserir {}:", key)?;
        self.tree.insert(key);
        write!(self.output, "{}", self.tree.render())?;
        writeln!(self.output)?;
        writeln!(self.output)?;

        Ok(())
    }

    /// Removes one occurrence of `key` (if present), printing the tree before and after
    pub fn remove(&mut self, key: &str) -> Result<()> {
        writeln!(self.output, "Removendo {} da árvore AVL:", key)?;
        write!(self.output, "{}", self.tree.render())?;
        writeln!(self.output)?;

        if !self.tree.remove(key) {
            info!(key, "name not in tree");
        }

        writeln!(self.output, "Árvore após remover {}:", key)?;
        write!(self.output, "{}", self.tree.render())?;
        writeln!(self.output)?;
        writeln!(self.output)?;

        Ok(())
    }

    /// Prints the whole tree
    pub fn show(&mut self) -> Result<()> {
        writeln!(self.output, "Árvore AVL:")?;
        write!(self.output, "{}", self.tree.render())?;
        writeln!(self.output)?;
        self.output.flush()?;

        Ok(())
    }

    /// Runs the menu until the user quits or the input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let line = match self.prompt("Escolha uma opção: ")? {
                Some(line) => line,
                None => break,
            };

            match Choice::parse(&line) {
                Some(Choice::Add) => match self.prompt("Digite o nome a ser adicionado: ")? {
                    Some(key) => self.add(key)?,
                    None => break,
                },

                Some(Choice::Remove) => match self.prompt("Digite o nome a ser removido: ")? {
                    Some(key) => self.remove(&key)?,
                    None => break,
                },

                Some(Choice::Show) => self.show()?,

                Some(Choice::Quit) => break,

                None => {
                    warn!(choice = %line.trim(), "invalid menu option");
                    writeln!(self.output, "Opção inválida: {}", line.trim())?;
                },
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "Menu:")?;
        writeln!(self.output, "1. Adicionar nome")?;
        writeln!(self.output, "2. Remover nome")?;
        writeln!(self.output, "3. Mostrar árvore")?;
        writeln!(self.output, "4. Sair")?;

        Ok(())
    }

    /// Prints `text` and reads one line, without its line ending. Returns `None` at end of input.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(len);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    fn shell(input: &str) -> Shell<Cursor<Vec<u8>>, Vec<u8>> {
        Shell::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(shell: Shell<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(shell.into_output()).unwrap()
    }

    #[test]
    fn parse_choices() {
        assert_eq!(Choice::parse("1"), Some(Choice::Add));
        assert_eq!(Choice::parse(" 2 "), Some(Choice::Remove));
        assert_eq!(Choice::parse("3\r"), Some(Choice::Show));
        assert_eq!(Choice::parse("4"), Some(Choice::Quit));
        assert_eq!(Choice::parse("5"), None);
        assert_eq!(Choice::parse(""), None);
    }

    #[test]
    fn add_prints_before_and_after() {
        let mut shell = shell("");
        shell.add("Bia".to_string()).unwrap();

        let expected = "\
Inserindo Bia na árvore AVL:
Raiz: None

Árvore após inserir Bia:
Raiz: Bia


";
        assert_eq!(output(shell), expected);
    }

    #[test]
    fn quiet_seed_prints_nothing() {
        let mut shell = shell("");
        let keys = vec!["c", "b", "a"].into_iter().map(String::from);
        shell.seed(keys, true).unwrap();

        assert_eq!(shell.tree().len(), 3);
        assert_eq!(shell.tree().root().map(|node| node.key().as_str()), Some("b"));
        assert_eq!(output(shell), "");
    }

    #[test]
    fn menu_session() {
        let mut shell = shell("1\nAna\n1\nBeto\n2\nAna\n2\nZé\n3\n9\n4\n");
        shell.run().unwrap();

        let keys: Vec<_> = shell.tree().iter_preorder().cloned().collect();
        assert_eq!(keys, &["Beto"]);

        let out = output(shell);
        assert!(out.starts_with("Menu:\n1. Adicionar nome\n2. Remover nome\n3. Mostrar árvore\n4. Sair\n"));
        assert!(out.contains("Digite o nome a ser adicionado: Inserindo Ana na árvore AVL:\n"));
        assert!(out.contains("Árvore após inserir Beto:\nRaiz: Ana\n    E--- None\n    D--- Beto\n"));
        assert!(out.contains("Árvore após remover Ana:\nRaiz: Beto\n"));
        // Removing an absent name leaves the tree as it was
        assert!(out.contains("Removendo Zé da árvore AVL:\nRaiz: Beto\n\nÁrvore após remover Zé:\nRaiz: Beto\n"));
        assert!(out.contains("Árvore AVL:\nRaiz: Beto\n"));
        assert!(out.contains("Opção inválida: 9\n"));
        assert_eq!(out.matches("Menu:").count(), 7);
    }

    #[test]
    fn end_of_input_quits() {
        let mut shell = shell("1\nAna\n1\n");
        shell.run().unwrap();

        assert_eq!(shell.tree().len(), 1);
        assert!(output(shell).ends_with("Digite o nome a ser adicionado: "));
    }
}
