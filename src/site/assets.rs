pub const STYLE_CSS: &str = r#":root {
    --primary-color: #3498db;
    --secondary-color: #2c3e50;
    --light-color: #ecf0f1;
    --border-radius: 8px;
    --box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
    --transition: all 0.3s ease;
}

* { margin: 0; padding: 0; box-sizing: border-box; }

body {
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    line-height: 1.6;
    color: #333;
    background-color: #f8f9fa;
}

.container { max-width: 1200px; margin: 0 auto; padding: 0 20px; }

header {
    background: linear-gradient(135deg, var(--secondary-color), var(--primary-color));
    color: white;
    padding: 2rem 0;
    margin-bottom: 2rem;
    text-align: center;
    box-shadow: var(--box-shadow);
}

header h1 { font-size: 2.5rem; margin-bottom: 0.5rem; }
header .subtitle { font-size: 1.2rem; opacity: 0.9; }

.stats-container {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
    gap: 1.5rem;
    margin-bottom: 2rem;
}

.stat-card, .fixture-card, .league-nav, .date-nav {
    background: white;
    border-radius: var(--border-radius);
    box-shadow: var(--box-shadow);
}

.stat-card { padding: 1.5rem; text-align: center; }
.stat-card h3 { color: var(--secondary-color); font-size: 1.8rem; }

.fixtures-container {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(350px, 1fr));
    gap: 1.5rem;
    margin-bottom: 2rem;
}

.fixture-card {
    padding: 1.5rem;
    border-left: 4px solid var(--primary-color);
    transition: var(--transition);
}

.fixture-card.live { border-left-color: #e74c3c; }
.fixture-card:hover { transform: translateY(-3px); }

.fixture-header, .fixture-teams {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 1rem;
}

.league-badge {
    background: var(--primary-color);
    color: white;
    padding: 0.3rem 0.8rem;
    border-radius: 20px;
    font-size: 0.8rem;
}

.team { text-align: center; flex: 1; }
.team-name { font-weight: 600; font-size: 1.1rem; }
.team-country, .fixture-time, .fixture-details { font-size: 0.9rem; color: #666; }
.vs { font-weight: 700; color: var(--primary-color); margin: 0 1rem; }

.league-nav, .date-nav { padding: 1rem; margin-bottom: 2rem; }
.league-list, .date-list { display: flex; flex-wrap: wrap; gap: 0.5rem; list-style: none; }

.league-item, .date-item, .filter-btn {
    background: var(--light-color);
    padding: 0.5rem 1rem;
    border-radius: 20px;
    font-size: 0.9rem;
    cursor: pointer;
    border: none;
}

.league-item a { color: inherit; text-decoration: none; }
.league-item:hover, .date-item:hover, .active { background: var(--primary-color); color: white; }

footer {
    background: var(--secondary-color);
    color: white;
    padding: 2rem 0;
    margin-top: 3rem;
    text-align: center;
}

@media (max-width: 768px) {
    header h1 { font-size: 2rem; }
    .fixtures-container, .stats-container { grid-template-columns: 1fr; }
}
"#;

pub const MAIN_JS: &str = r#"document.addEventListener('DOMContentLoaded', function () {
    initFilters();
    initSearch();
    initNavigation('.date-item', 'data-date');
});

function showCards(predicate) {
    document.querySelectorAll('.fixture-card').forEach(function (card) {
        card.style.display = predicate(card) ? 'block' : 'none';
    });
}

function initFilters() {
    const buttons = document.querySelectorAll('.filter-btn');
    buttons.forEach(function (button) {
        button.addEventListener('click', function () {
            buttons.forEach(function (b) { b.classList.remove('active'); });
            this.classList.add('active');
            const filter = this.getAttribute('data-filter');
            const day = new Date();
            if (filter === 'tomorrow') day.setDate(day.getDate() + 1);
            const wanted = day.toISOString().split('T')[0];
            showCards(function (card) {
                if (filter === 'today' || filter === 'tomorrow') return card.getAttribute('data-date') === wanted;
                if (filter === 'live') return card.getAttribute('data-status') === 'live';
                return true;
            });
        });
    });
}

function initSearch() {
    const input = document.getElementById('search-input');
    if (!input) return;
    input.addEventListener('input', function () {
        const term = this.value.toLowerCase().trim();
        showCards(function (card) {
            if (term.length === 0) return true;
            return ['data-home-team', 'data-away-team', 'data-league'].some(function (attr) {
                return (card.getAttribute(attr) || '').toLowerCase().includes(term);
            });
        });
    });
}

function initNavigation(selector, attr) {
    const items = document.querySelectorAll(selector);
    items.forEach(function (item) {
        item.addEventListener('click', function () {
            items.forEach(function (i) { i.classList.remove('active'); });
            this.classList.add('active');
            const value = this.getAttribute(attr);
            showCards(function (card) { return card.getAttribute(attr) === value; });
        });
    });
}
"#;
