// src/noyau/commande.rs
//
// Les deux canaux d’entrée (boutons + clavier) se réduisent à ce jeu unique.

/// Une action élémentaire sur la calculette.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commande {
    /// Symbole à ajouter (chiffre, opérateur, `.`, `(`, `)`, `%`, ou glyphe ÷ × −).
    Symbole(char),
    Effacer,
    SupprimerDernier,
    Evaluer,
    BasculerSigne,
}

/// Touches nommées du clavier (hors caractères imprimables).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToucheNommee {
    Entree,
    Retour,
    Echap,
}

impl Commande {
    /// Caractère tapé au clavier -> commande. `None` = touche ignorée.
    ///
    /// - `,` vaut `.` (claviers à virgule décimale)
    /// - `=` évalue
    pub fn depuis_caractere(c: char) -> Option<Commande> {
        match c {
            '0'..='9' | '+' | '-' | '*' | '/' | '.' | '(' | ')' | '%' => Some(Commande::Symbole(c)),
            '÷' | '×' | '−' => Some(Commande::Symbole(c)),
            ',' => Some(Commande::Symbole('.')),
            '=' => Some(Commande::Evaluer),
            _ => None,
        }
    }

    pub fn depuis_touche(t: ToucheNommee) -> Commande {
        match t {
            ToucheNommee::Entree => Commande::Evaluer,
            ToucheNommee::Retour => Commande::SupprimerDernier,
            ToucheNommee::Echap => Commande::Effacer,
        }
    }
}
