use std::collections::HashMap;
use std::sync::OnceLock;

use super::markers::Tag;

static FIXED_TEXTS: OnceLock<FixedTextTable> = OnceLock::new();

/// Canonical wording of the invariable prayers, keyed by marker name.
///
/// Values are plain text and contain no `[[...]]` tags, so substituting them
/// never produces a new key.
pub struct FixedTextTable {
    entries: HashMap<&'static str, &'static str>,
}

impl FixedTextTable {
    /// The process-wide table, built on first access.
    pub fn global() -> &'static FixedTextTable {
        FIXED_TEXTS.get_or_init(|| FixedTextTable {
            entries: ENTRIES.iter().copied().collect(),
        })
    }

    /// Looks up a key such as `INSERTAR_GLORIA`, ignoring ASCII case.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries.get(key.to_ascii_uppercase().as_str()).copied()
    }

    pub fn lookup(&self, tag: &Tag<'_>) -> Option<&'static str> {
        if tag.is_marker() { self.get(tag.inner) } else { None }
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const ENTRIES: [(&str, &str); 6] = [
    ("INSERTAR_YO_CONFIESO", YO_CONFIESO),
    ("INSERTAR_GLORIA", GLORIA),
    ("INSERTAR_CREDO", CREDO),
    ("INSERTAR_SANTO", SANTO),
    ("INSERTAR_PADRE_NUESTRO", PADRE_NUESTRO),
    ("INSERTAR_CORDERO", CORDERO),
];

const YO_CONFIESO: &str = "**TODOS:**
Yo confieso ante Dios todopoderoso
y ante ustedes, hermanos,
que he pecado mucho de pensamiento, palabra, obra y omisión.
Por mi culpa, por mi culpa, por mi gran culpa.
Por eso ruego a santa María, siempre Virgen,
a los ángeles, a los santos
y a ustedes, hermanos,
que intercedan por mí ante Dios, nuestro Señor.

**SACERDOTE:**
Dios todopoderoso tenga misericordia de nosotros,
perdone nuestros pecados
y nos lleve a la vida eterna.

**TODOS:**
Amén.";

const GLORIA: &str = "**TODOS:**
Gloria a Dios en el cielo,
y en la tierra paz a los hombres que ama el Señor.
Por tu inmensa gloria te alabamos,
te bendecimos, te adoramos,
te glorificamos, te damos gracias,
Señor Dios, Rey celestial,
Dios Padre todopoderoso.
Señor, Hijo único, Jesucristo;
Señor Dios, Cordero de Dios, Hijo del Padre;
tú que quitas el pecado del mundo, ten piedad de nosotros;
tú que quitas el pecado del mundo, atiende nuestra súplica;
tú que estás sentado a la derecha del Padre, ten piedad de nosotros;
porque sólo tú eres Santo, sólo tú Señor,
sólo tú Altísimo, Jesucristo,
con el Espíritu Santo en la gloria de Dios Padre.
Amén.";

const CREDO: &str = "**TODOS:**
Creo en un solo Dios, Padre todopoderoso,
Creador del cielo y de la tierra,
de todo lo visible y lo invisible.
Creo en un solo Señor, Jesucristo, Hijo único de Dios,
nacido del Padre antes de todos los siglos:
Dios de Dios, Luz de Luz, Dios verdadero de Dios verdadero,
engendrado, no creado, de la misma naturaleza del Padre,
por quien todo fue hecho;
que por nosotros, los hombres,
y por nuestra salvación bajó del cielo,
y por obra del Espíritu Santo se encarnó de María, la Virgen, y se hizo hombre;
y por nuestra causa fue crucificado en tiempos de Poncio Pilato;
padeció y fue sepultado,
y resucitó al tercer día, según las Escrituras,
y subió al cielo, y está sentado a la derecha del Padre;
y de nuevo vendrá con gloria para juzgar a vivos y muertos,
y su reino no tendrá fin.
Creo en el Espíritu Santo, Señor y dador de vida,
que procede del Padre y del Hijo,
que con el Padre y el Hijo recibe una misma adoración y gloria,
y que habló por los profetas.
Creo en la Iglesia, que es una, santa, católica y apostólica.
Confieso que hay un solo bautismo para el perdón de los pecados.
Espero la resurrección de los muertos y la vida del mundo futuro.
Amén.";

const SANTO: &str = "**TODOS:**
Santo, Santo, Santo es el Señor, Dios del Universo.
Llenos están el cielo y la tierra de tu gloria.
¡Hosanna en el cielo!
Bendito el que viene en nombre del Señor.
¡Hosanna en el cielo!";

const PADRE_NUESTRO: &str = "**TODOS:**
Padre nuestro, que estás en el cielo,
santificado sea tu Nombre;
venga a nosotros tu reino;
hágase tu voluntad en la tierra como en el cielo.
Danos hoy nuestro pan de cada día;
perdona nuestras ofensas,
como también nosotros perdonamos a los que nos ofenden;
no nos dejes caer en la tentación,
y líbranos del mal.";

const CORDERO: &str = "**TODOS:**
Cordero de Dios, que quitas el pecado del mundo, ten piedad de nosotros.
Cordero de Dios, que quitas el pecado del mundo, ten piedad de nosotros.
Cordero de Dios, que quitas el pecado del mundo, danos la paz.";

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::markers::tags;

    #[test]
    fn has_all_six_prayers() {
        let table = FixedTextTable::global();
        assert_eq!(table.len(), 6);
        assert!(table.get("INSERTAR_GLORIA").unwrap().starts_with("**TODOS:**\nGloria a Dios"));
        assert_eq!(table.get("insertar_credo"), table.get("INSERTAR_CREDO"));
        assert_eq!(table.get("LECTURA_1"), None);
    }

    #[test]
    fn values_contain_no_substitution_keys() {
        let table = FixedTextTable::global();
        for key in table.keys() {
            let value = table.get(key).unwrap();
            assert_eq!(tags(value).count(), 0, "{key} contains a tag");
            for other in table.keys() {
                assert!(!value.contains(other), "{key} contains {other}");
            }
        }
    }

    #[test]
    fn global_is_initialized_once() {
        assert!(std::ptr::eq(FixedTextTable::global(), FixedTextTable::global()));
    }
}
