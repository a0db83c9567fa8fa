use crate::error::{Error, Result};

/// One hierarchy level and the places it contains. The first level is the
/// pit level: only its places may host monsters.
#[derive(Debug, Clone)]
pub struct LevelPlaces {
    pub level: String,
    pub places: Vec<String>,
}

/// Fixed input corpora for a generation run.
///
/// The string content is opaque to the generator; only the list shapes
/// matter. `Default` carries the stock registry dataset.
#[derive(Debug, Clone)]
pub struct Corpus {
    pub user_names: Vec<String>,
    pub levels: Vec<LevelPlaces>,
    pub monster_names: Vec<String>,
    pub torture_names: Vec<String>,
    pub first_names: Vec<String>,
    pub patronymics: Vec<String>,
    pub tortured_surnames: Vec<String>,
    pub working_surnames: Vec<String>,
    pub nondistributed_surnames: Vec<String>,
    pub sin_type_names: Vec<String>,
    pub status_names: Vec<String>,
    /// Complaint titles; index-matched with `complaint_bodies`.
    pub complaint_titles: Vec<String>,
    pub complaint_bodies: Vec<String>,
    pub event_actions: Vec<String>,
    pub event_subjects_distributed: Vec<String>,
    pub event_subjects_nondistributed: Vec<String>,
    pub event_conditions: Vec<String>,
    pub work_names: Vec<String>,
}

impl Corpus {
    /// Validates the policy-independent shape of the corpus. Parallel lists
    /// must be index-matched and every list a step unconditionally draws
    /// from must be non-empty.
    pub fn validate(&self) -> Result<()> {
        require("user_names", &self.user_names)?;
        require("monster_names", &self.monster_names)?;
        require("torture_names", &self.torture_names)?;
        require("first_names", &self.first_names)?;
        require("patronymics", &self.patronymics)?;
        require("tortured_surnames", &self.tortured_surnames)?;
        require("working_surnames", &self.working_surnames)?;
        require("sin_type_names", &self.sin_type_names)?;
        require("complaint_titles", &self.complaint_titles)?;
        require("event_actions", &self.event_actions)?;
        require("event_subjects_distributed", &self.event_subjects_distributed)?;
        require("event_conditions", &self.event_conditions)?;
        require("work_names", &self.work_names)?;

        if self.complaint_titles.len() != self.complaint_bodies.len() {
            return Err(Error::InvalidCorpus(format!(
                "complaint_titles and complaint_bodies are index-matched but differ in length ({} vs {})",
                self.complaint_titles.len(),
                self.complaint_bodies.len()
            )));
        }
        // The first two statuses carry fixed meanings (unprocessed, approved)
        // referenced by literal id from complaints and events.
        if self.status_names.len() < 2 {
            return Err(Error::InvalidCorpus(format!(
                "at least 2 status_names are required, got {}",
                self.status_names.len()
            )));
        }
        let Some(pit) = self.levels.first() else {
            return Err(Error::InvalidCorpus("levels must not be empty".to_string()));
        };
        if pit.places.is_empty() {
            return Err(Error::InvalidCorpus(format!(
                "pit level '{}' must contain at least one place",
                pit.level
            )));
        }
        let outer_places: usize = self.levels[1..].iter().map(|level| level.places.len()).sum();
        if outer_places == 0 {
            return Err(Error::InvalidCorpus(
                "at least one place outside the pit level is required".to_string(),
            ));
        }
        Ok(())
    }
}

fn require(name: &str, list: &[String]) -> Result<()> {
    if list.is_empty() {
        return Err(Error::InvalidCorpus(format!("{name} must not be empty")));
    }
    Ok(())
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

impl Default for Corpus {
    fn default() -> Self {
        Self {
            user_names: strings(&[
                "UNAUTHORIZED",
                "Аид",
                "Персефона",
                "Эак",
                "Радамант",
                "Минос",
            ]),
            levels: vec![
                LevelPlaces {
                    level: "Тартар".to_string(),
                    places: strings(&[
                        "Река страданий",
                        "Лес ужаса",
                        "Озеро страха",
                        "Пещера мучений",
                        "Море пыток",
                    ]),
                },
                LevelPlaces {
                    level: "Асфоделевый луг".to_string(),
                    places: strings(&[
                        "Поле сомнений",
                        "Река печали",
                        "Лес разочарований",
                        "Степь тоски",
                        "Болото горечи",
                    ]),
                },
                LevelPlaces {
                    level: "Элизиум".to_string(),
                    places: strings(&[
                        "Лес сказок",
                        "Поле чудес",
                        "Море радости",
                        "Озеро спокойствия",
                        "Дорога добра",
                    ]),
                },
            ],
            monster_names: strings(&[
                "Алекто",
                "Мегера",
                "Тисифона",
                "Лернейская Гидра",
                "Ехидна",
                "Герион",
                "Пифон",
            ]),
            torture_names: strings(&[
                "Бесконечное наполнение бездонной бочки",
                "Разрыв внутренних органов",
                "Башмаки с шипом",
                "Вилка еретика",
                "Кресло для ведьминого купания",
                "Испанский сапог",
                "Пытка водой",
                "Кошачий коготь",
                "Дыба",
                "Четвертование лошадьми",
                "Груша",
                "Очищение души",
                "Пресс для черепа",
                "Колыбель Иуды",
                "Железная дева",
                "Кол",
                "Пила",
            ]),
            first_names: strings(&[
                "Иван",
                "Дмитрий",
                "Николай",
                "Сергей",
                "Глеб",
                "Борис",
                "Денис",
                "Валерий",
                "Мирослав",
                "Григорий",
                "Артемий",
                "Виталий",
                "Александр",
                "Алексей",
            ]),
            patronymics: strings(&[
                "Иванович",
                "Дмитриевич",
                "Николаевич",
                "Сергеевич",
                "Глебович",
                "Борисович",
                "Денисович",
                "Валерьевич",
                "Мирославович",
                "Григорьевич",
                "Артемьевич",
                "Витальевич",
                "Александрович",
                "Алексеевич",
            ]),
            tortured_surnames: strings(&[
                "Иванов",
                "Шигалев",
                "Григорьев",
                "Краснов",
                "Белов",
                "Кроваткин",
                "Стулович",
                "Красочников",
                "Вернандский",
                "Чопорев",
                "Трубчанский",
                "Туманов",
                "Тучников",
                "Капотников",
            ]),
            working_surnames: strings(&[
                "Чуков",
                "Геков",
                "Сланцев",
                "Тихомиров",
                "Чукотский",
                "Корышкин",
                "Лебедев",
                "Ларченко",
                "Круглёныш",
                "Ножница",
                "Лимонченко",
                "Сташевский",
            ]),
            nondistributed_surnames: strings(&[
                "Пух",
                "Рыжов",
                "Чмок",
                "Кряк",
                "Кройченко",
                "Пекаревский",
                "Кисловязов",
                "Собирович",
                "Дровосековский",
                "Лукич",
                "Застекайло",
                "Многокриков",
            ]),
            sin_type_names: strings(&[
                "Убийство",
                "Воровство",
                "Военное преступление",
                "Профессиональное преступление",
                "Рецидивистское преступление",
                "Вымогательство",
                "Хулиганство",
                "Доведение до самоубийства",
                "Похищение человека",
                "Террористический акт",
                "жестокое обращение с животными",
                "Клевета",
                "Побои",
                "Причинение тяжкого вреда здоровью",
            ]),
            status_names: strings(&["Не обработано", "Одобрено", "Отказано"]),
            complaint_titles: strings(&[
                "Перевод на работу",
                "Смена пытки",
                "Перерождение",
                "Большая просьба",
                "Меня замучали!",
            ]),
            complaint_bodies: strings(&[
                "Переведите меня, пожалуйста, на работу",
                "Смените мне пытку, пожалуйста",
                "Переродите меня, пожалуйста",
                "Я очень устал, дайте мне работу вместо пытки",
                "Пожалуйста, увольте моего монстра, он делает то, что мне не назначено!",
            ]),
            event_actions: strings(&[
                "Убил",
                "Сбил",
                "Похитил",
                "Избил",
                "Сбросил со скалы",
                "Довел до самоубийства",
                "Замучил",
                "Ударил",
                "Застрелил",
                "Держал в заложниках",
            ]),
            event_subjects_distributed: strings(&[
                "консьержку",
                "знакомую",
                "знакомого",
                "собаку",
                "одногруппника",
                "жену",
                "прохожего",
                "соседа",
                "друга",
                "брата",
            ]),
            event_subjects_nondistributed: strings(&[
                "кошку",
                "тещу",
                "тестя",
                "сестру",
                "двоюродную сестру",
                "племянницу",
                "бездомного",
                "коллегу",
                "начальника",
                "племянника",
            ]),
            event_conditions: strings(&[
                "с особой жестокостью",
                "не единожды",
                "будучи принужденным",
                "будучи в состоянии алкогольного опьянения",
                "будучи в состоянии наркотического опьянения",
                "будучи в состоянии аффекта",
                "и скрылся с места преступления",
                "и пришел с повинной",
                "и был пойман с поличным",
                "и понес наказание в виде лишения свободы",
            ]),
            work_names: strings(&[
                "Шут",
                "Лекарь",
                "Добытчик серебра",
                "Стеркорариус",
                "Переносчик людей",
                "Гимназиарх",
                "Создатель табличек с проклятьями",
                "Похоронный клоун",
                "Пращик",
                "Водный органист",
                "Летописец",
                "Бард",
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_corpus_is_valid() {
        Corpus::default().validate().expect("stock corpus validates");
    }

    #[test]
    fn mismatched_complaint_lists_are_rejected() {
        let mut corpus = Corpus::default();
        corpus.complaint_bodies.pop();
        let err = corpus.validate().expect_err("mismatch rejected");
        assert!(matches!(err, Error::InvalidCorpus(_)));
    }

    #[test]
    fn pit_level_without_places_is_rejected() {
        let mut corpus = Corpus::default();
        corpus.levels[0].places.clear();
        let err = corpus.validate().expect_err("empty pit rejected");
        assert!(matches!(err, Error::InvalidCorpus(_)));
    }

    #[test]
    fn a_single_status_is_rejected() {
        let mut corpus = Corpus::default();
        corpus.status_names.truncate(1);
        let err = corpus.validate().expect_err("too few statuses rejected");
        assert!(matches!(err, Error::InvalidCorpus(_)));
    }
}
