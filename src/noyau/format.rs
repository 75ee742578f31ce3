// src/noyau/format.rs
//
// Résultat canonique : au plus 12 chiffres significatifs, zéros de fin retirés.
// Même découpage fixe / exponentiel que Number.prototype.toPrecision :
// exposant décimal < -6 ou >= 12 => forme exponentielle "1.5e+21".

/// Chiffres significatifs du résultat affiché.
pub const CHIFFRES_SIGNIFICATIFS: usize = 12;

/// Décimales suffisantes pour écrire exactement n’importe quel f64
/// (le plus long développement exact compte 767 chiffres significatifs).
const DECIMALES_EXACTES: usize = 800;

/// Formate un résultat FINI. (Les non-finis sont refusés en amont.)
pub fn format_resultat(v: f64) -> String {
    // -0 s’affiche "0"
    if v == 0.0 {
        return "0".to_string();
    }

    let p = CHIFFRES_SIGNIFICATIFS;
    let signe = if v < 0.0 { "-" } else { "" };
    let (chiffres, exposant) = chiffres_arrondis(v.abs(), p);

    if exposant < -6 || exposant >= p as i32 {
        // exemptée du retrait des zéros
        let signe_exp = if exposant < 0 { '-' } else { '+' };
        let (tete, reste) = chiffres.split_at(1);
        return format!("{signe}{tete}.{reste}e{signe_exp}{}", exposant.abs());
    }

    let fixe = if exposant < 0 {
        let zeros = "0".repeat((-exposant - 1) as usize);
        format!("0.{zeros}{chiffres}")
    } else {
        let (entier, fraction) = chiffres.split_at(exposant as usize + 1);
        format!("{entier}.{fraction}")
    };
    format!("{signe}{}", retirer_zeros(fixe))
}

/// Les `p` premiers chiffres de `v` (> 0) arrondis, et l’exposant décimal APRÈS
/// arrondi (9.99…95 -> 1.0e+1).
///
/// Arrondi sur le développement décimal exact : à égalité parfaite on prend
/// la valeur la plus grande (100000000000.5 -> 100000000001), pas la paire.
fn chiffres_arrondis(v: f64, p: usize) -> (String, i32) {
    let exact = format!("{:.*e}", DECIMALES_EXACTES, v);
    let (mantisse, exposant) = exact.split_once('e').unwrap_or((exact.as_str(), "0"));
    let mut exposant = exposant.parse::<i32>().unwrap_or(0);

    let tous: Vec<u8> = mantisse
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    let mut chiffres: Vec<u8> = tous.iter().copied().take(p).collect();

    if tous.get(p).is_some_and(|&d| d >= 5) {
        // retenue depuis la droite ; 999…9 devient 100…0 avec un exposant de plus
        let mut retenue = true;
        for d in chiffres.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                retenue = false;
                break;
            }
        }
        if retenue {
            chiffres.insert(0, 1);
            chiffres.truncate(p);
            exposant += 1;
        }
    }

    let texte = chiffres.iter().map(|&d| char::from(b'0' + d)).collect();
    (texte, exposant)
}

/// "2.50000" -> "2.5", "4.000" -> "4" ; sans point : inchangé.
fn retirer_zeros(mut s: String) -> String {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    s
}
